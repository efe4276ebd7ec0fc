use rs_instasort::{dom, sort_by_views, Error, Options, DEFAULT_CANDIDATE_SELECTOR};

#[test]
fn options_default_values_are_sensible() {
    let options = Options::default();
    assert_eq!(options.candidate_selector, DEFAULT_CANDIDATE_SELECTOR);
    assert_eq!(options.root_tag, "article");
    assert_eq!(options.target_host, "instagram.com");
    assert!(options.row_size.is_none());
    assert!(options.row_selector.is_none());
    assert!(options.url.is_none());
}

#[test]
fn options_struct_update_syntax_overrides_selected_fields_only() {
    let options = Options {
        row_size: Some(3),
        ..Options::default()
    };

    assert_eq!(options.row_size, Some(3));
    assert_eq!(options.root_tag, "article");
    assert_eq!(options.label_keywords, vec!["view", "play"]);
}

#[test]
fn options_load_from_json_config() {
    let options = Options::from_json(
        r#"{
            "candidate_selector": "li.tile",
            "root_tag": "li",
            "label_keywords": ["wiedergabe"],
            "row_size": 4
        }"#,
    )
    .expect("valid config");

    assert_eq!(options.candidate_selector, "li.tile");
    assert_eq!(options.label_keywords, vec!["wiedergabe"]);
    assert_eq!(options.row_size, Some(4));
    assert_eq!(options.testid_keywords, vec!["view"]);
}

#[test]
fn invalid_json_config_is_rejected() {
    assert!(matches!(Options::from_json("[1, 2]"), Err(Error::ParseError(_))));
    assert!(matches!(
        Options::from_json(r#"{"root_tag": ""}"#),
        Err(Error::InvalidOptions(_))
    ));
}

#[test]
fn custom_selectors_drive_the_sort() {
    let html = r#"<ul id="list">
        <li class="tile" id="a"><em>12 views</em></li>
        <li class="tile" id="b"><em>99 views</em></li>
        <li class="other" id="c"><em>1M views</em></li>
    </ul>"#;
    let options = Options {
        candidate_selector: "li.tile".to_string(),
        root_tag: "li".to_string(),
        ..Options::default()
    };

    let doc = dom::parse(html);
    let response = sort_by_views(&doc, &options);
    assert_eq!(response.posts_found, Some(2));

    let ids: Vec<String> = dom::element_children(&dom::query_selector_all(&doc, "#list")[0])
        .iter()
        .filter_map(|c| dom::get_attribute(c, "id").map(|s| s.to_string()))
        .collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}

#[test]
fn localized_label_keywords_are_matched() {
    let html = r#"<main id="feed">
        <article id="a"><span aria-label="Aufrufe: 5">x</span></article>
        <article id="b"><span aria-label="Aufrufe: 50">x</span></article>
    </main>"#;

    let doc = dom::parse(html);
    assert!(!sort_by_views(&doc, &Options::default()).success);

    let options = Options {
        label_keywords: vec!["aufrufe".to_string()],
        ..Options::default()
    };
    let response = sort_by_views(&doc, &options);
    assert!(response.success);
    assert_eq!(response.posts_found, Some(2));

    let ids: Vec<String> = dom::element_children(&dom::query_selector_all(&doc, "#feed")[0])
        .iter()
        .filter_map(|c| dom::get_attribute(c, "id").map(|s| s.to_string()))
        .collect();
    assert_eq!(ids, vec!["b", "a"]);
}
