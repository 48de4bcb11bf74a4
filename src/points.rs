// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Reward-points calculator.
//!
//! The score of a receipt is the additive sum of five independent
//! sub-rules. A sub-rule whose input fails to parse returns
//! [`RuleScore::Unavailable`] and contributes zero; the other rules still
//! run. [`compute_points`] therefore never fails and never panics.
//!
//! # Rules
//!
//! | Rule | Contribution |
//! |------|--------------|
//! | Retailer name | 1 point per `[A-Za-z0-9_]` character |
//! | Round-dollar total | +50 if cents == 0, +25 if cents % 25 == 0 |
//! | Item pairs | 5 points per 2 items |
//! | Item description | `price * 0.2` rounded, +1 if rounding went down |
//! | Purchase date/time | +6 for an odd day, +10 for 2pm-4pm |

use crate::receipt::{Item, Receipt};
use chrono::{Datelike, NaiveDateTime, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Outcome of a single sub-rule.
///
/// `Unavailable` marks a rule whose required field failed to parse. It is
/// scored as zero, but kept distinct so tests and logs can see the
/// degradation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScore {
    Scored(i64),
    Unavailable,
}

impl RuleScore {
    /// Points contributed by this rule, zero when unavailable.
    pub fn or_zero(self) -> i64 {
        match self {
            RuleScore::Scored(points) => points,
            RuleScore::Unavailable => 0,
        }
    }
}

/// Computes the full score of a receipt.
///
/// Pure and idempotent: two calls on the same receipt always return the
/// same value. Parse failures inside any sub-rule degrade that rule to
/// zero without affecting the others.
pub fn compute_points(receipt: &Receipt) -> i64 {
    let mut points = retailer_points(&receipt.retailer);

    match total_points(&receipt.total) {
        RuleScore::Scored(p) => points += p,
        RuleScore::Unavailable => {
            tracing::debug!(total = %receipt.total, "total did not parse, round-dollar rule skipped");
        }
    }

    points += item_pair_points(receipt.items.len());

    for item in &receipt.items {
        match description_points(item) {
            RuleScore::Scored(p) => points += p,
            RuleScore::Unavailable => {
                tracing::debug!(price = %item.price, "item price did not parse, description rule skipped");
            }
        }
    }

    match date_time_points(&receipt.purchase_date, &receipt.purchase_time) {
        RuleScore::Scored(p) => points += p,
        RuleScore::Unavailable => {
            tracing::debug!(
                date = %receipt.purchase_date,
                time = %receipt.purchase_time,
                "purchase timestamp did not parse, date/time rule skipped"
            );
        }
    }

    points
}

/// One point per alphanumeric-or-underscore character in the retailer name.
///
/// Characters are tested individually against the basic-Latin class, so
/// whitespace, punctuation, and non-ASCII characters contribute nothing.
pub fn retailer_points(retailer: &str) -> i64 {
    retailer
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .count() as i64
}

/// Round-dollar rule on the receipt total.
///
/// The total is split on the decimal point and both sides parsed as
/// integers; anything else is `Unavailable`. The two bonuses are
/// independent: a round-dollar total like `"9.00"` earns both (+75).
pub fn total_points(total: &str) -> RuleScore {
    let Some((dollars, cents)) = total.split_once('.') else {
        return RuleScore::Unavailable;
    };
    if dollars.parse::<i64>().is_err() {
        return RuleScore::Unavailable;
    }
    let Ok(cents) = cents.parse::<i64>() else {
        return RuleScore::Unavailable;
    };

    let mut points = 0;
    if cents == 0 {
        points += 50;
    }
    if cents % 25 == 0 {
        points += 25;
    }
    RuleScore::Scored(points)
}

/// Five points for every two items on the receipt.
pub fn item_pair_points(item_count: usize) -> i64 {
    (item_count / 2) as i64 * 5
}

/// Description-length rule for a single item.
///
/// If the trimmed description's byte length is a multiple of 3 (zero
/// qualifies), the item contributes `price * 0.2` rounded half away from
/// zero, plus one more whenever the rounded value understates the raw
/// product. Items with other lengths score zero; an unparsable price is
/// `Unavailable`.
pub fn description_points(item: &Item) -> RuleScore {
    let trimmed = item.short_description.trim();
    if trimmed.len() % 3 != 0 {
        return RuleScore::Scored(0);
    }

    let Ok(price) = item.price.parse::<Decimal>() else {
        return RuleScore::Unavailable;
    };

    let raw = price * Decimal::new(2, 1);
    let rounded = raw.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let Some(mut points) = rounded.to_i64() else {
        return RuleScore::Unavailable;
    };
    if rounded < raw {
        points += 1;
    }
    RuleScore::Scored(points)
}

/// Date/time rule: +6 for an odd day of month, +10 for a purchase hour in
/// the half-open range [14, 16).
///
/// Date and time are concatenated and parsed against a single fixed
/// layout; if the combined timestamp does not parse, neither bonus applies.
pub fn date_time_points(date: &str, time: &str) -> RuleScore {
    let stamp = format!("{date} {time}");
    let Ok(purchased) = NaiveDateTime::parse_from_str(&stamp, "%Y-%m-%d %H:%M") else {
        return RuleScore::Unavailable;
    };

    let mut points = 0;
    if purchased.day() % 2 == 1 {
        points += 6;
    }
    if (14..16).contains(&purchased.hour()) {
        points += 10;
    }
    RuleScore::Scored(points)
}
