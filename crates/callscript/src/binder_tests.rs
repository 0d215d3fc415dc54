//! Tests for placeholder substitution

#[cfg(test)]
mod tests {
    use crate::binder::{placeholders, substitute, Bindings, VariableBinder};

    fn bindings(pairs: &[(&str, &str)]) -> Bindings {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_substitutes_all_placeholders() {
        let values = bindings(&[("agentName", "Alex"), ("companyName", "Nova Reach")]);
        let rendered = substitute("This is {{agentName}} from {{companyName}}.", &values);
        assert_eq!(rendered, "This is Alex from Nova Reach.");
    }

    #[test]
    fn test_missing_binding_renders_empty() {
        let values = bindings(&[("agentName", "Alex")]);
        let rendered = substitute("Hi {{customerName}}, this is {{agentName}}.", &values);
        assert_eq!(rendered, "Hi , this is Alex.");
    }

    #[test]
    fn test_empty_binding_renders_empty() {
        let values = bindings(&[("customerName", ""), ("agentName", "Alex")]);
        let rendered = substitute("Hi {{customerName}}, this is {{agentName}}.", &values);
        assert_eq!(rendered, "Hi , this is Alex.");
    }

    #[test]
    fn test_inner_whitespace_is_allowed() {
        let values = bindings(&[("nextStep", "a quick call")]);
        assert_eq!(substitute("Open to {{ nextStep }}?", &values), "Open to a quick call?");
    }

    #[test]
    fn test_values_are_not_expanded_again() {
        let values = bindings(&[("notes", "{{agentName}}"), ("agentName", "Alex")]);
        assert_eq!(substitute("Note: {{notes}}", &values), "Note: {{agentName}}");
    }

    #[test]
    fn test_unused_bindings_are_ignored() {
        let values = bindings(&[("unrelated", "value")]);
        assert_eq!(substitute("Plain text.", &values), "Plain text.");
    }

    #[test]
    fn test_configured_fallback() {
        let binder = VariableBinder::with_fallback("there");
        let values = bindings(&[("customerName", "")]);
        assert_eq!(binder.substitute("Hi {{customerName}}!", &values), "Hi there!");
        assert_eq!(binder.substitute("Hi {{other}}!", &Bindings::new()), "Hi there!");
    }

    #[test]
    fn test_lists_placeholders_once_in_order() {
        let names = placeholders("{{b}} then {{a}} then {{ b }}");
        assert_eq!(names, vec!["b".to_string(), "a".to_string()]);
    }
}
