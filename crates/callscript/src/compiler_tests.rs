//! Tests for script compilation

#[cfg(test)]
mod tests {
    use std::thread;

    use crate::{
        binder::{Bindings, VariableBinder},
        catalog::{catalog, find_template, Segment, Template},
        compiler::{compile_script, compile_with_binder, ResolvedSegment},
        tone::Tone,
    };

    fn bindings(pairs: &[(&str, &str)]) -> Bindings {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn jamie_bindings() -> Bindings {
        bindings(&[
            ("customerName", "Jamie"),
            ("agentName", "Alex"),
            ("companyName", "Nova Reach"),
            ("nextStep", "a 15 minute call"),
        ])
    }

    #[test]
    fn test_intro_and_close_friendly() {
        let template = find_template("intro-and-close").expect("intro-and-close exists");
        let script = compile_script(template, Tone::Friendly, &jamie_bindings());

        assert_eq!(
            script.segments,
            vec![
                ResolvedSegment {
                    id: "greeting".to_string(),
                    text: "Hi Jamie, this is Alex from Nova Reach.".to_string(),
                    pause_seconds: Some(1),
                },
                ResolvedSegment {
                    id: "ask".to_string(),
                    text: "Would you be open to a 15 minute call?".to_string(),
                    pause_seconds: None,
                },
            ]
        );
    }

    #[test]
    fn test_missing_customer_name_keeps_segment() {
        let template = find_template("intro-and-close").expect("intro-and-close exists");
        let mut values = jamie_bindings();
        values.remove("customerName");

        let script = compile_script(template, Tone::Friendly, &values);
        assert_eq!(script.len(), 2);
        assert_eq!(script.segments[0].text, "Hi , this is Alex from Nova Reach.");
        assert_eq!(script.segments[0].pause_seconds, Some(1));
    }

    #[test]
    fn test_empty_segment_dropped_with_its_pause() {
        let template = Template::new("t", "T", "")
            .segment(Segment::new("first").phrase(Tone::Friendly, "Hello.").pause(1))
            .segment(Segment::new("blank").phrase(Tone::Friendly, "  {{notes}}  ").pause(2))
            .segment(Segment::new("last").phrase(Tone::Friendly, "Bye."));

        let script = compile_script(&template, Tone::Friendly, &Bindings::new());
        let ids: Vec<&str> = script.segments.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "last"]);
        assert!(script.segments.iter().all(|s| s.pause_seconds != Some(2)));
    }

    #[test]
    fn test_segment_without_any_usable_tone_is_dropped() {
        let template = Template::new("t", "T", "")
            .segment(Segment::new("formal-only").phrase(Tone::Formal, "Good day.").pause(1))
            .segment(Segment::new("default").phrase(Tone::Friendly, "Hi."));

        let script = compile_script(&template, Tone::Urgent, &Bindings::new());
        assert_eq!(script.len(), 1);
        assert_eq!(script.segments[0].id, "default");
    }

    #[test]
    fn test_tone_falls_back_per_segment() {
        let template = find_template("intro-and-close").expect("intro-and-close exists");
        let script = compile_script(template, Tone::Empathetic, &jamie_bindings());

        assert!(script.segments[0].text.contains("I hope I'm not catching you"));
        // no empathetic ask, friendly phrasing is used
        assert_eq!(script.segments[1].text, "Would you be open to a 15 minute call?");
    }

    #[test]
    fn test_text_is_trimmed() {
        let template = Template::new("t", "T", "")
            .segment(Segment::new("s").phrase(Tone::Friendly, "  {{a}} spaced  "));
        let script = compile_script(&template, Tone::Friendly, &bindings(&[("a", "Well")]));
        assert_eq!(script.segments[0].text, "Well spaced");
    }

    #[test]
    fn test_every_template_and_tone_compiles_without_leaking_delimiters() {
        for template in catalog().templates() {
            for tone in Tone::ALL {
                let script = compile_script(template, tone, &Bindings::new());
                for segment in &script.segments {
                    assert!(
                        !segment.text.contains("{{") && !segment.text.contains("}}"),
                        "{} / {} leaked a placeholder: {}",
                        template.id(),
                        tone,
                        segment.text
                    );
                    assert!(!segment.text.trim().is_empty());
                }
            }
        }
    }

    #[test]
    fn test_order_is_definition_order() {
        let template = find_template("discovery-call").expect("discovery-call exists");
        let values = bindings(&[
            ("customerName", "Jamie"),
            ("agentName", "Alex"),
            ("companyName", "Nova Reach"),
            ("objective", "talk pipeline"),
            ("valueProp", "ship faster"),
            ("nextStep", "meet Tuesday"),
            ("notes", "Happy to email details instead."),
        ]);

        let script = compile_script(template, Tone::Formal, &values);
        let ids: Vec<&str> = script.segments.iter().map(|s| s.id.as_str()).collect();
        let expected: Vec<&str> = template.segments().iter().map(|s| s.id()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_notes_segment_dropped_when_unbound() {
        let template = find_template("discovery-call").expect("discovery-call exists");
        let script = compile_script(template, Tone::Friendly, &jamie_bindings());
        assert!(script.segments.iter().all(|s| s.id != "notes"));
    }

    #[test]
    fn test_compile_is_idempotent() {
        let template = find_template("follow-up").expect("follow-up exists");
        let values = jamie_bindings();
        let first = compile_script(template, Tone::Urgent, &values);
        let second = compile_script(template, Tone::Urgent, &values);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).expect("serializes"),
            serde_json::to_string(&second).expect("serializes")
        );
    }

    #[test]
    fn test_custom_fallback_binder() {
        let template = find_template("intro-and-close").expect("intro-and-close exists");
        let binder = VariableBinder::with_fallback("there");
        let script = compile_with_binder(template, Tone::Friendly, &Bindings::new(), &binder);
        assert_eq!(script.segments[0].text, "Hi there, this is there from there.");
    }

    #[test]
    fn test_concurrent_compiles_do_not_interfere() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                thread::spawn(move || {
                    let template = find_template("intro-and-close").expect("intro-and-close exists");
                    let name = format!("Caller{}", i);
                    let values = bindings(&[("customerName", name.as_str())]);
                    (0..50)
                        .map(|_| compile_script(template, Tone::Friendly, &values))
                        .all(|script| script.segments[0].text.starts_with(&format!("Hi {},", name)))
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().expect("thread completes"));
        }
    }

    #[test]
    fn test_preview_text_joins_segments() {
        let template = find_template("intro-and-close").expect("intro-and-close exists");
        let script = compile_script(template, Tone::Friendly, &jamie_bindings());
        assert_eq!(
            script.preview_text(),
            "Hi Jamie, this is Alex from Nova Reach. Would you be open to a 15 minute call?"
        );
    }
}
