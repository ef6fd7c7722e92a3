use comrak::{parse_document, Arena, ComrakOptions};
use slidemark::markdown::{configure_options, document_blocks};
use slidemark::{
    Block, DirectiveName, DirectiveValue, FrontMatter, parse_presentation, parse_slides,
    slides_from_tree,
};

fn text(value: &str) -> DirectiveValue {
    DirectiveValue::Text(value.to_string())
}

#[test]
fn test_k_dividers_produce_k_plus_one_slides() {
    for k in 0..5 {
        let markdown = (0..=k)
            .map(|i| format!("# Slide {}\n\nBody {}\n", i, i))
            .collect::<Vec<_>>()
            .join("\n---\n\n");

        let slides = parse_slides(&markdown).expect("markdown parses");
        assert_eq!(slides.len(), k + 1, "document with {} dividers", k);
        for (i, slide) in slides.iter().enumerate() {
            assert_eq!(slide.content[0], format!("<h1>Slide {}</h1>\n", i));
        }
    }
}

#[test]
fn test_adjacent_dividers_never_produce_empty_slides() {
    let slides = parse_slides("# A\n\n---\n\n---\n\n***\n\n# B\n\n---\n").expect("parses");

    assert_eq!(slides.len(), 2);
    assert!(slides.iter().all(|slide| !slide.content.is_empty()));
}

#[test]
fn test_quoted_and_boolean_values() {
    let slides = parse_slides("<!--\nbackgroundColor: \"#ff0000\"\npaginate: true\n-->\n\n# A\n")
        .expect("parses");

    let directives = &slides[0].directives;
    assert_eq!(directives.get("backgroundColor"), Some(&text("#ff0000")));
    assert_eq!(directives.get("paginate"), Some(&DirectiveValue::Bool(true)));
}

#[test]
fn test_regular_directive_superseded_later() {
    let markdown = "<!-- color: red -->\n\n# 1\n\n---\n\n# 2\n\n---\n\n<!-- color: green -->\n\n# 3\n\n---\n\n# 4\n";
    let slides = parse_slides(markdown).expect("parses");

    let colors: Vec<_> = slides
        .iter()
        .map(|slide| slide.directives.effective(DirectiveName::Color).cloned())
        .collect();
    assert_eq!(
        colors,
        vec![
            Some(text("red")),
            Some(text("red")),
            Some(text("green")),
            Some(text("green")),
        ]
    );
}

#[test]
fn test_scoped_directive_absent_from_next_slide() {
    let markdown = "# 1\n\n<!-- _class: lead -->\n\n---\n\n# 2\n\n---\n\n<!-- _class: lead -->\n\n# 3\n";
    let slides = parse_slides(markdown).expect("parses");

    assert_eq!(slides[0].directives.get("_class"), Some(&text("lead")));
    assert!(!slides[1].directives.contains("_class"));
    assert_eq!(slides[2].directives.get("_class"), Some(&text("lead")));
}

#[test]
fn test_tree_entry_point_matches_text_entry_point() {
    let markdown = "# A\n\n<!-- paginate: true -->\n\n---\n\n# B\n\n<!-- _color: 'blue' -->\n\n---\n\n# C\n";

    let arena = Arena::new();
    let mut options = ComrakOptions::default();
    configure_options(&mut options);
    let root = parse_document(&arena, markdown, &options);

    let blocks = document_blocks(root);
    let dividers = blocks
        .iter()
        .filter(|block| matches!(block, Block::Divider))
        .count();
    let comments = blocks
        .iter()
        .filter(|block| matches!(block, Block::Comment(_)))
        .count();
    assert_eq!((dividers, comments), (2, 2));

    let tree_slides = slides_from_tree(root);
    let text_slides = parse_slides(markdown).expect("parses");

    assert_eq!(tree_slides.len(), 3);
    for (tree, text) in tree_slides.iter().zip(&text_slides) {
        assert_eq!(tree.content.len(), text.content.len());
        assert_eq!(tree.directives, text.directives);
    }
    assert!(!text_slides[2].directives.contains("_color"));
}

#[test]
fn test_slides_serialize_with_raw_directive_names() {
    let slides = parse_slides("# A\n\n<!-- _color: 'blue'\npaginate: true -->\n").expect("parses");
    let json = serde_json::to_value(&slides).expect("slides serialize");

    assert_eq!(json[0]["directives"]["_color"], "blue");
    assert_eq!(json[0]["directives"]["paginate"], true);
    assert_eq!(json[0]["content"][0], "<h1>A</h1>\n");
}

#[test]
fn test_bare_divider_under_paragraph_splits() {
    let slides = parse_slides("# A\n\nIntro\n---\n# B\n").expect("parses");

    assert_eq!(slides.len(), 2);
    assert_eq!(slides[0].content, vec!["<h1>A</h1>\n", "<p>Intro</p>\n"]);
    assert_eq!(slides[1].content, vec!["<h1>B</h1>\n"]);
}

#[test]
fn test_unclosed_comment_keeps_later_slides() {
    let slides = parse_slides("# A\n\n<!-- paginate: true\n\n---\n\n# B\n\n---\n\n# C\n")
        .expect("parses");

    assert_eq!(slides.len(), 3);
    assert_eq!(slides[2].content, vec!["<h1>C</h1>\n"]);
    assert!(slides.iter().all(|slide| slide.directives.is_empty()));
}

#[test]
fn test_leading_divider_without_metadata_is_not_front_matter() {
    let presentation = parse_presentation("---\n# A\n---\n# B\n").expect("parses");

    assert_eq!(presentation.front_matter, FrontMatter::default());
    assert_eq!(presentation.slides.len(), 2);
    assert_eq!(presentation.slides[0].content, vec!["<h1>A</h1>\n"]);
    assert_eq!(presentation.slides[1].content, vec!["<h1>B</h1>\n"]);
}
