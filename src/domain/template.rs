use crate::domain::WorkflowOverrides;

/// Placeholder tokens recognized in workflow templates.
pub const BUILD_NUMBER_OFFSET_TOKEN: &str = "__BUILD_NUMBER_OFFSET__";
pub const LINUX_ENABLED_TOKEN: &str = "__LINUX_ENABLED__";
pub const WINDOWS_ENABLED_TOKEN: &str = "__WINDOWS_ENABLED__";

fn bool_token(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Render a workflow template by literal token substitution.
///
/// Tokens are replaced in a fixed order, each replacing every occurrence.
/// The offset renders as a decimal string, the platform flags as lowercase
/// `true`/`false`.
pub fn render_workflow(template: &str, overrides: &WorkflowOverrides) -> String {
    template
        .replace(BUILD_NUMBER_OFFSET_TOKEN, &overrides.build_number_offset.to_string())
        .replace(LINUX_ENABLED_TOKEN, bool_token(overrides.linux_enabled))
        .replace(WINDOWS_ENABLED_TOKEN, bool_token(overrides.windows_enabled))
}
