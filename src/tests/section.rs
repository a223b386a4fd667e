use super::{GuideDocument, Section, BLANK};

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[test]
fn test_push_blank_skips_empty_content() {
    let mut section = Section::new("A", 1);
    section.push_blank();
    assert!(section.content.is_empty());
}

#[test]
fn test_push_blank_collapses_runs() {
    let mut section = Section::new("A", 1);
    section.content.push("text".to_string());
    section.push_blank();
    section.push_blank();
    section.push_blank();
    assert_eq!(section.content, lines(&["text", BLANK]));
}

#[test]
fn test_prune_is_recursive() {
    let mut grandchild = Section::new("C", 3);
    grandchild.content = lines(&["deep", ""]);
    let mut child = Section::new("B", 2);
    child.content = lines(&["one", "", "two", ""]);
    child.children.push(grandchild);
    let mut root = Section::new("root", 0);
    root.content = lines(&["top", ""]);
    root.children.push(child);

    root.prune();

    assert_eq!(root.content, lines(&["top"]));
    assert_eq!(root.children[0].content, lines(&["one", "", "two"]));
    assert_eq!(root.children[0].children[0].content, lines(&["deep"]));
}

#[test]
fn test_count_and_walk_preorder() {
    let mut a = Section::new("A", 1);
    a.children.push(Section::new("A.1", 2));
    let mut root = Section::new("root", 0);
    root.children.push(a);
    root.children.push(Section::new("B", 1));

    assert_eq!(root.count(), 4);

    let mut titles = Vec::new();
    root.walk(&mut |s| titles.push(s.title.as_str()));
    assert_eq!(titles, vec!["root", "A", "A.1", "B"]);
}

#[test]
fn test_json_key_order() {
    let doc = GuideDocument {
        generated_from: "guide.docx".to_string(),
        root: Section::new("root", 0),
    };
    let json = serde_json::to_string(&doc).unwrap();
    assert_eq!(
        json,
        r#"{"generated_from":"guide.docx","root":{"title":"root","level":0,"content":[],"children":[],"id":"","path":[]}}"#
    );
}

#[test]
fn test_deserialise_without_ids() {
    let section: Section =
        serde_json::from_str(r#"{"title":"A","level":1,"content":["x"],"children":[]}"#).unwrap();
    assert_eq!(section.id, "");
    assert!(section.path.is_empty());
    assert_eq!(section.content, lines(&["x"]));
}
