//! Allowed `sub_branch` values for a branch.
//!
//! Only the branch name matters. Head Office is split into fixed divisions;
//! every other branch has the single placeholder [`NOT_APPLICABLE`].

pub const HEAD_OFFICE: &str = "Head Office";

pub const NOT_APPLICABLE: &str = "N/A";

pub const HEAD_OFFICE_SUB_BRANCHES: [&str; 6] = [
    "Chairman Sir & MD & CEO Office",
    "Agent Banking",
    "AML & CFT",
    "ICT",
    "ADC",
    "Card Division",
];

/// Sub-branch choices for `branch_name`, in display order.
pub fn options_for(branch_name: &str) -> &'static [&'static str] {
    if branch_name == HEAD_OFFICE {
        &HEAD_OFFICE_SUB_BRANCHES
    } else {
        &[NOT_APPLICABLE]
    }
}

/// The sub-branch preselected when `branch_name` is chosen: the first option.
pub fn default_for(branch_name: &str) -> &'static str {
    options_for(branch_name)
        .first()
        .copied()
        .unwrap_or(NOT_APPLICABLE)
}
