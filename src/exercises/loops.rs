//! Early exits from loops.

use crate::assert;
use crate::config::RunConfig;
use crate::errors::CaseResult;
use crate::harness::Suite;
use crate::output::Reporter;

/// How many messages fit in `budget` when message `i` costs `1.0 + 0.01 * i`.
///
/// A NaN budget fits nothing. The count saturates at `u32::MAX`, which an
/// infinite budget reaches.
pub fn max_messages_within_budget(budget: f64) -> u32 {
    if budget.is_nan() {
        return 0;
    }
    if budget.is_infinite() && budget > 0.0 {
        return u32::MAX;
    }
    let mut total_cost = 0.0;
    let mut i = 0;
    loop {
        let cost = 1.0 + 0.01 * f64::from(i);
        if total_cost + cost > budget || i == u32::MAX {
            break i;
        }
        total_cost += cost;
        i += 1;
    }
}

pub fn primes_up_to(max: u32) -> Vec<u32> {
    let mut primes = Vec::new();
    for n in 2..=max {
        if n == 2 {
            primes.push(n);
            continue;
        }
        if n % 2 == 0 {
            continue;
        }
        if !has_odd_divisor(n) {
            primes.push(n);
        }
    }
    primes
}

// Trial division by odd candidates; `i <= n / i` keeps `i * i` from overflowing.
fn has_odd_divisor(n: u32) -> bool {
    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return true;
        }
        i += 2;
    }
    false
}

/// The listing printed for a prime search, one prime per line.
pub fn primes_listing(max: u32) -> String {
    let mut lines = vec![format!("Primes up to {}:", max)];
    lines.extend(primes_up_to(max).iter().map(u32::to_string));
    lines.join("\n")
}

pub fn suite<R: Reporter>(suite: &mut Suite<R>, config: &RunConfig) -> CaseResult {
    suite.describe("max_messages_within_budget", |g| {
        g.it("fits 9 messages in a budget of 10", || {
            assert::strict_equal(max_messages_within_budget(10.0), 9)
        });
        g.it("fits 73 messages in a budget of 100", || {
            assert::strict_equal(max_messages_within_budget(100.0), 73)
        });
        if config.with_submit {
            g.it("fits nothing in an empty budget", || {
                assert::strict_equal(max_messages_within_budget(0.0), 0)
            });
            g.it("fits exactly one message in a budget of 1", || {
                assert::strict_equal(max_messages_within_budget(1.0), 1)
            });
        }
        Ok(())
    })?;

    suite.describe("primes_up_to", |g| {
        g.it("lists the primes up to 10", || {
            assert::strict_equal(primes_listing(10).as_str(), "Primes up to 10:\n2\n3\n5\n7")
        });
        g.it("finds 8 primes up to 20", || {
            assert::strict_equal(primes_up_to(20).len(), 8)
        });
        if config.with_submit {
            g.it("ends with 29 below 30", || {
                assert::strict_equal(primes_up_to(30).last().copied(), Some(29))
            });
            g.it("has no primes below 2", || {
                assert::ok(primes_up_to(1).is_empty(), "expected no primes up to 1")
            });
        }
        Ok(())
    })
}
