//! TwiML (Twilio Markup Language) rendering for compiled scripts
//!
//! Produces the XML document Twilio executes when the outbound call connects.

use std::fmt::Write;

use crate::{
    compiler::ResolvedScript,
    voice::{Locale, Voice},
};

/// Builder for generating TwiML responses
#[derive(Debug, Clone, Default)]
pub struct TwimlBuilder {
    elements: Vec<TwimlElement>,
}

/// TwiML elements
#[derive(Debug, Clone)]
enum TwimlElement {
    Say {
        text: String,
        voice: String,
        language: String,
    },
    Pause {
        length: u32,
    },
}

impl TwimlBuilder {
    /// Create a new TwiML builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a Say element (text-to-speech)
    pub fn say(mut self, text: &str, voice: Voice, locale: Locale) -> Self {
        self.elements.push(TwimlElement::Say {
            text: xml_escape(text),
            voice: xml_escape(voice.as_str()),
            language: xml_escape(locale.as_str()),
        });
        self
    }

    /// Add a Pause element
    pub fn pause(mut self, seconds: u32) -> Self {
        self.elements.push(TwimlElement::Pause { length: seconds });
        self
    }

    /// Build the TwiML XML string
    pub fn build(self) -> String {
        let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Response>\n");

        for element in &self.elements {
            render_element(&mut xml, element, 1);
        }

        xml.push_str("</Response>");
        xml
    }
}

/// Render a compiled script as a TwiML document.
///
/// One `<Say>` per segment in script order, each followed by a `<Pause>` when
/// the segment carries one.
pub fn serialize_markup(script: &ResolvedScript, voice: Voice, locale: Locale) -> String {
    script
        .segments
        .iter()
        .fold(TwimlBuilder::new(), |builder, segment| {
            let builder = builder.say(&segment.text, voice, locale);
            match segment.pause_seconds {
                Some(seconds) => builder.pause(seconds),
                None => builder,
            }
        })
        .build()
}

/// Render a TwiML element to XML
fn render_element(xml: &mut String, element: &TwimlElement, indent: usize) {
    let indent_str = "  ".repeat(indent);

    match element {
        TwimlElement::Say {
            text,
            voice,
            language,
        } => {
            let _ = writeln!(
                xml,
                "{}<Say voice=\"{}\" language=\"{}\">{}</Say>",
                indent_str, voice, language, text
            );
        }
        TwimlElement::Pause { length } => {
            let _ = writeln!(xml, "{}<Pause length=\"{}\"/>", indent_str, length);
        }
    }
}

/// Escape special XML characters, dropping control characters XML 1.0 cannot carry
fn xml_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '\t' | '\n' | '\r' => escaped.push(c),
            '\u{0}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}' => {}
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::ResolvedSegment;

    fn segment(id: &str, text: &str, pause_seconds: Option<u32>) -> ResolvedSegment {
        ResolvedSegment {
            id: id.to_string(),
            text: text.to_string(),
            pause_seconds,
        }
    }

    #[test]
    fn test_say_and_pause_order() {
        let script = ResolvedScript {
            segments: vec![
                segment("greeting", "Hi Jamie.", Some(1)),
                segment("ask", "Got a minute?", None),
            ],
        };

        let twiml = serialize_markup(&script, Voice::PollyMatthew, Locale::EnGb);
        let expected = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
                        <Response>\n  \
                        <Say voice=\"Polly.Matthew\" language=\"en-GB\">Hi Jamie.</Say>\n  \
                        <Pause length=\"1\"/>\n  \
                        <Say voice=\"Polly.Matthew\" language=\"en-GB\">Got a minute?</Say>\n\
                        </Response>";
        assert_eq!(twiml, expected);
    }

    #[test]
    fn test_empty_script_is_bare_response() {
        let twiml = serialize_markup(&ResolvedScript::default(), Voice::default(), Locale::default());
        assert!(twiml.contains("<Response>\n</Response>"));
        assert!(!twiml.contains("<Say"));
        assert!(!twiml.contains("<Pause"));
    }

    #[test]
    fn test_text_is_escaped() {
        let script = ResolvedScript {
            segments: vec![segment("notes", "R&D <team> said \"hi\"", None)],
        };
        let twiml = serialize_markup(&script, Voice::PollyJoanna, Locale::EnUs);
        assert!(twiml.contains("R&amp;D &lt;team&gt; said &quot;hi&quot;"));
    }

    #[test]
    fn test_builder_pause_length() {
        let twiml = TwimlBuilder::new().pause(3).build();
        assert!(twiml.contains("<Pause length=\"3\"/>"));
    }

    #[test]
    fn test_control_characters_are_dropped() {
        let script = ResolvedScript {
            segments: vec![segment("greeting", "Hi Ja\u{1}mie\u{0}, line\tone", None)],
        };

        let twiml = serialize_markup(&script, Voice::PollyJoanna, Locale::EnUs);

        assert!(!twiml.contains('\u{0}'));
        assert!(!twiml.contains('\u{1}'));
        assert!(twiml.contains(">Hi Jamie, line\tone</Say>"));
    }

    #[test]
    fn test_xml_escape() {
        let escaped = xml_escape("Hello <world> & \"friends\"");
        assert_eq!(escaped, "Hello &lt;world&gt; &amp; &quot;friends&quot;");
    }
}
