use super::*;

#[test]
fn style_without_hue_rotation_only_sizes() {
    assert_eq!(HERO_SCENE.style(), "width: 100%; height: 100%;");
}

#[test]
fn style_with_hue_rotation_adds_filter() {
    let scene = HERO_SCENE.with_hue_rotate(90);
    assert_eq!(scene.url, HERO_SCENE.url);
    assert_eq!(scene.style(), "width: 100%; height: 100%; filter: hue-rotate(90deg);");
}

