//! End-to-end rendering behaviour of `render_markup`.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tl_markup::{RenderOptions, render_markup, render_markup_with};

const SAMPLE: &str = "\
**Key Trends**
- Imports rose 45% from Feb to Dec
- Exports tracked imports at ~58%

### Notable Patterns
* Q4 shows the *strongest* growth

---

## Recommendations
1. Increase capacity at JNPT
2. Hedge crude exposure
";

#[test]
fn rendering_is_deterministic() {
    let first = render_markup(SAMPLE);
    let second = render_markup(SAMPLE);
    assert_eq!(first, second);
}

#[test]
fn renders_full_three_section_reply() {
    assert_eq!(
        render_markup(SAMPLE).as_str(),
        "<p><strong>Key Trends</strong></p>\n\
         <ul>\n<li>Imports rose 45% from Feb to Dec</li>\n<li>Exports tracked imports at ~58%</li>\n</ul>\n\
         <h3>Notable Patterns</h3>\n\
         <ul>\n<li>Q4 shows the <em>strongest</em> growth</li>\n</ul>\n\
         <hr />\n\
         <h2>Recommendations</h2>\n\
         <ul>\n<li><strong>1.</strong> Increase capacity at JNPT</li>\n\
         <li><strong>2.</strong> Hedge crude exposure</li>\n</ul>"
    );
}

#[test]
fn level_three_heading_keeps_text() {
    assert_eq!(
        render_markup("### Notable Patterns").as_str(),
        "<h3>Notable Patterns</h3>"
    );
}

#[test]
fn bold_is_one_strong_element() {
    let html = render_markup("**Key Trends**");
    assert_eq!(html.as_str(), "<p><strong>Key Trends</strong></p>");
    assert!(!html.as_str().contains("<em>"));
}

#[test]
fn consecutive_bullets_form_one_list() {
    let html = render_markup("- A\n- B\n- C");
    assert_eq!(
        html.as_str(),
        "<ul>\n<li>A</li>\n<li>B</li>\n<li>C</li>\n</ul>"
    );
}

#[rstest]
#[case::blank_line("- A\n\n- B")]
#[case::heading("- A\n## Middle\n- B")]
#[case::rule("- A\n---\n- B")]
fn separated_bullets_form_two_lists(#[case] input: &str) {
    let html = render_markup(input);
    assert_eq!(html.as_str().matches("<ul>").count(), 2, "{html}");
    assert_eq!(html.as_str().matches("<li>").count(), 2, "{html}");
}

#[test]
fn numbered_item_keeps_numeral_and_text() {
    assert_eq!(
        render_markup("1. Increase capacity").as_str(),
        "<ul>\n<li><strong>1.</strong> Increase capacity</li>\n</ul>"
    );
}

#[rstest]
#[case("first\n\n\nsecond")]
#[case("\n\n")]
#[case("## Head\n\n\n\n- item\n\n\n")]
#[case("  \n\t\n")]
fn never_emits_empty_paragraphs(#[case] input: &str) {
    let html = render_markup(input);
    assert!(!html.as_str().contains("<p></p>"), "{html}");
    for paragraph in html.as_str().split("<p>").skip(1) {
        let body = paragraph.split("</p>").next().unwrap_or_default();
        assert!(!body.trim().is_empty(), "{html}");
    }
}

#[test]
fn raw_markup_is_escaped() {
    assert_eq!(
        render_markup("- Use <script> & \"quotes\"").as_str(),
        "<ul>\n<li>Use &lt;script&gt; &amp; &quot;quotes&quot;</li>\n</ul>"
    );
}

#[test]
fn escaped_text_inside_strong() {
    assert_eq!(
        render_markup("**R&D <spend>**").as_str(),
        "<p><strong>R&amp;D &lt;spend&gt;</strong></p>"
    );
}

#[test]
fn empty_input_renders_empty_fragment() {
    assert!(render_markup("").is_empty());
}

#[test]
fn classes_match_dashboard_styling() {
    let html = render_markup_with("- item\n\ntext", RenderOptions { classes: true });
    assert_eq!(
        html.as_str(),
        "<ul class=\"list-disc ml-6 mb-4 space-y-1 text-foreground\">\n\
         <li class=\"ml-4 mb-1.5\">item</li>\n</ul>\n\
         <p class=\"mb-3 text-foreground\">text</p>"
    );
}

#[test]
fn fragment_serializes_as_plain_string() {
    let json = serde_json::to_string(&render_markup("## Hi")).unwrap();
    assert_eq!(json, "\"<h2>Hi</h2>\"");
}
