use widgets::{ArrayWidget, Attrs, SubwidgetKind};

fn items(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn one_subwidget_per_item() {
    let widget = ArrayWidget::text();
    let value = items(&["a", "b", "c"]);
    let context = widget
        .render_context("tags", Some(value.as_slice()), &Attrs::new())
        .unwrap();

    assert_eq!(context.subwidgets.len(), 3);
    assert!(!context.is_empty);
    for (index, subwidget) in context.subwidgets.iter().enumerate() {
        assert_eq!(subwidget.name, "tags");
        assert_eq!(subwidget.value, value[index]);
        assert_eq!(subwidget.kind, SubwidgetKind::TextInput);
    }
}

#[test]
fn subwidget_values_match_format_value() {
    let widget = ArrayWidget::text();
    let value = items(&["a", "b"]);
    let context = widget
        .render_context("tags", Some(value.as_slice()), &Attrs::new())
        .unwrap();
    let formatted = widget.format_value(Some(value.as_slice())).unwrap();

    for (subwidget, text) in context.subwidgets.iter().zip(formatted.iter()) {
        assert_eq!(&subwidget.value, text);
    }
}

#[test]
fn absent_value_renders_one_empty_placeholder() {
    let widget = ArrayWidget::text();
    let attrs = Attrs::from_pairs(vec![("id", "x")]);
    let context = widget.render_context("tags", None, &attrs).unwrap();

    assert!(context.is_empty);
    assert_eq!(context.subwidgets.len(), 1);
    assert_eq!(context.subwidgets[0].value, "");
    assert_eq!(context.subwidgets[0].attrs.id(), Some("x_0"));
}

#[test]
fn empty_list_is_present_but_has_no_rows() {
    let widget = ArrayWidget::text();
    let context = widget
        .render_context("tags", Some(&[]), &Attrs::new())
        .unwrap();

    assert!(!context.is_empty);
    assert_eq!(context.subwidgets.len(), 0);
}

#[test]
fn subwidget_ids_derive_from_base_id_and_index() {
    let widget = ArrayWidget::text();
    let attrs = Attrs::from_pairs(vec![("id", "id_tags"), ("class", "vTextField")]);
    let value = items(&["a", "b"]);
    let context = widget.render_context("tags", Some(value.as_slice()), &attrs).unwrap();

    assert_eq!(context.subwidgets[0].attrs.id(), Some("id_tags_0"));
    assert_eq!(context.subwidgets[1].attrs.id(), Some("id_tags_1"));
    // The other attrs carry over unchanged.
    assert_eq!(context.subwidgets[0].attrs.get("class"), Some("vTextField"));
    // The parent keeps its own id.
    assert_eq!(context.attrs.id(), Some("id_tags"));
}

#[test]
fn no_base_id_means_no_subwidget_ids() {
    let widget = ArrayWidget::text();
    let value = items(&["a"]);
    let context = widget
        .render_context("tags", Some(value.as_slice()), &Attrs::new())
        .unwrap();

    assert_eq!(context.subwidgets[0].attrs.id(), None);
}

#[test]
fn render_context_is_deterministic() {
    let widget = ArrayWidget::text();
    let attrs = Attrs::from_pairs(vec![("id", "x")]);
    let value = items(&["a", "b"]);

    let first = widget.render_context("tags", Some(value.as_slice()), &attrs).unwrap();
    let second = widget.render_context("tags", Some(value.as_slice()), &attrs).unwrap();
    assert_eq!(first, second);
}

#[test]
fn required_flag_propagates_to_subwidgets() {
    let widget = ArrayWidget::text().with_required(true);
    let value = items(&["a"]);
    let context = widget
        .render_context("tags", Some(value.as_slice()), &Attrs::new())
        .unwrap();

    assert!(context.required);
    assert!(context.subwidgets[0].required);
}

#[test]
fn textarea_widget_renders_textarea_controls() {
    let widget = ArrayWidget::textarea();
    let value = items(&["a"]);
    let context = widget
        .render_context("notes", Some(value.as_slice()), &Attrs::new())
        .unwrap();

    assert_eq!(context.subwidgets[0].kind, SubwidgetKind::Textarea);
}

#[test]
fn date_time_widget_renders_split_controls() {
    let widget = ArrayWidget::date_time();
    let context = widget.render_context("times", None, &Attrs::new()).unwrap();

    assert_eq!(context.subwidgets[0].kind, SubwidgetKind::SplitDateTime);
}
