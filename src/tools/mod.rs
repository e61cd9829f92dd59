/// Downloadable CLI tools and app-name resolution
pub mod registry;

pub use registry::{find_tool, known_tools, Tool};

/// Build the message shown when `app_name` is not an installable app
///
/// Names that match a known tool (case-insensitively) point the user at
/// `arkade get`, everything else at the list of apps. The message always
/// echoes `app_name` as the caller typed it.
pub fn check_for_tool(app_name: &str, tools: &[Tool]) -> String {
    if find_tool(app_name, tools).is_some() {
        format!(
            "no such app. {} is available as a tool, run \"arkade get {}\" to get it",
            app_name, app_name
        )
    } else {
        format!(
            "no such app: {}, run \"arkade install --help\" for a list of apps",
            app_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tools() -> Vec<Tool> {
        vec![Tool::new("kubectl"), Tool::new("helm"), Tool::new("k9s")]
    }

    #[test]
    fn test_tool_exists() {
        assert_eq!(
            check_for_tool("kubectl", &sample_tools()),
            "no such app. kubectl is available as a tool, run \"arkade get kubectl\" to get it"
        );
    }

    #[test]
    fn test_tool_does_not_exist() {
        assert_eq!(
            check_for_tool("randomtool", &sample_tools()),
            "no such app: randomtool, run \"arkade install --help\" for a list of apps"
        );
    }

    #[test]
    fn test_case_insensitive_match_keeps_input_casing() {
        assert_eq!(
            check_for_tool("KUBECTL", &sample_tools()),
            "no such app. KUBECTL is available as a tool, run \"arkade get KUBECTL\" to get it"
        );
    }

    #[test]
    fn test_empty_tool_list() {
        assert_eq!(
            check_for_tool("kubectl", &[]),
            "no such app: kubectl, run \"arkade install --help\" for a list of apps"
        );
        assert_eq!(
            check_for_tool("", &[]),
            "no such app: , run \"arkade install --help\" for a list of apps"
        );
    }

    #[test]
    fn test_empty_app_name() {
        assert_eq!(
            check_for_tool("", &[Tool::new("kubectl")]),
            "no such app: , run \"arkade install --help\" for a list of apps"
        );
        // Only a tool with a literally empty name can match
        assert_eq!(
            check_for_tool("", &[Tool::new("")]),
            "no such app.  is available as a tool, run \"arkade get \" to get it"
        );
    }

    #[test]
    fn test_colliding_names() {
        let tools = vec![Tool::new("Helm"), Tool::new("helm")];
        assert_eq!(
            check_for_tool("hElM", &tools),
            "no such app. hElM is available as a tool, run \"arkade get hElM\" to get it"
        );
    }

    #[test]
    fn test_deterministic() {
        let tools = sample_tools();
        let first = check_for_tool("K9s", &tools);
        let second = check_for_tool("K9s", &tools);
        assert_eq!(first, second);
    }

    #[test]
    fn test_registry_lookup() {
        let tools = known_tools();
        assert!(check_for_tool("kubectl", &tools).contains("arkade get kubectl"));
        assert!(check_for_tool("mongodb", &tools).contains("arkade install --help"));
    }

    #[test]
    fn test_non_ascii_match_keeps_input_casing() {
        assert_eq!(
            check_for_tool("ΣΣ", &[Tool::new("σσ")]),
            "no such app. ΣΣ is available as a tool, run \"arkade get ΣΣ\" to get it"
        );
    }
}
