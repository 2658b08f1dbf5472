use super::*;

#[test]
fn test_position_layout() {
    let layout = VertexLayout::position();
    assert_eq!(layout.stride, 12);
    assert_eq!(layout.attributes.len(), 1);
    assert_eq!(layout.attributes[0].location, ATTRIB_POSITION);
    assert_eq!(layout.attributes[0].offset, 0);
}

#[test]
fn test_position_color_layout_is_interleaved() {
    let layout = VertexLayout::position_color();
    assert_eq!(layout.stride, 24);
    assert_eq!(layout.attributes[1].location, ATTRIB_COLOR);
    assert_eq!(layout.attributes[1].offset, 12);
}

#[test]
fn test_position_color_uv_offsets() {
    let layout = VertexLayout::position_color_uv();
    let offsets: Vec<u32> = layout.attributes.iter().map(|a| a.offset).collect();

    assert_eq!(offsets, vec![0, 12, 28]);
    assert_eq!(layout.stride, 36);
}

#[test]
fn test_has_attribute() {
    let layout = VertexLayout::position_uv();
    assert!(layout.has_attribute(ATTRIB_POSITION));
    assert!(layout.has_attribute(ATTRIB_UV));
    assert!(!layout.has_attribute(ATTRIB_COLOR));
}

#[test]
fn test_default_layout_is_empty() {
    let layout = VertexLayout::default();
    assert_eq!(layout.stride, 0);
    assert!(layout.attributes.is_empty());
}
