/// Distinct attribute combinations observed per grant within a workgroup.
pub mod combinations;
/// Grants shared by every member of a workgroup, expressed as unconditional rules.
pub mod common_grants;
/// Antichain reduction of a grant's combinations under set inclusion.
pub mod minimal_cover;
/// Partitioning users by workgroup.
pub mod workgroup;
