//! Switch-style dispatch on a subscription tier.

use crate::assert;
use crate::config::RunConfig;
use crate::errors::CaseResult;
use crate::harness::Suite;
use crate::output::Reporter;

/// Monthly price of a tier, in cents. Unknown tiers cost nothing.
pub fn monthly_price(tier: &str) -> u32 {
    match tier {
        "basic" => 100 * 100,
        "premium" => 100 * 150,
        "enterprise" => 100 * 500,
        _ => 0,
    }
}

pub fn suite<R: Reporter>(suite: &mut Suite<R>, config: &RunConfig) -> CaseResult {
    suite.describe("monthly_price", |g| {
        g.it("charges 10000 cents for basic", || {
            assert::strict_equal(monthly_price("basic"), 10_000)
        });
        g.it("charges 15000 cents for premium", || {
            assert::strict_equal(monthly_price("premium"), 15_000)
        });
        if config.with_submit {
            g.it("charges 50000 cents for enterprise", || {
                assert::strict_equal(monthly_price("enterprise"), 50_000)
            });
            g.it("charges nothing for an unknown tier", || {
                assert::strict_equal(monthly_price("platinum"), 0)?;
                assert::strict_equal(monthly_price(""), 0)
            });
        }
        Ok(())
    })
}
