//! Range checks over a machine context using Validation.

use crate::context::Context;
use crate::validation::violations::ConfigViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result type of a single range check.
pub type RangeCheck = Validation<(), NonEmptyVec<ConfigViolation>>;

fn check_page_size(ctx: &Context) -> RangeCheck {
    if ctx.page_size() == 0 {
        Validation::fail(ConfigViolation::ZeroPageSize)
    } else {
        Validation::success(())
    }
}

fn check_current_page(ctx: &Context) -> RangeCheck {
    if ctx.current_page() == 0 {
        Validation::fail(ConfigViolation::ZeroCurrentPage)
    } else {
        Validation::success(())
    }
}

/// Only meaningful once there is at least one page to be on.
fn check_page_in_range(ctx: &Context) -> RangeCheck {
    let total_pages = ctx.total_pages();
    let page = ctx.current_page();
    if total_pages > 0 && page > total_pages {
        Validation::fail(ConfigViolation::PageOutOfRange { page, total_pages })
    } else {
        Validation::success(())
    }
}

/// Run every range check, accumulating ALL violations.
///
/// Returns `Validation::Success(())` if all checks pass.
pub fn validate_context(ctx: &Context) -> RangeCheck {
    let checks = vec![
        check_page_size(ctx),
        check_current_page(ctx),
        check_page_in_range(ctx),
    ];

    Validation::all_vec(checks).map(|_| ())
}
