#![allow(clippy::float_cmp)]

use super::*;
use crate::geometry::{Point, Size};
use crate::shape::{Shape, ShapeKind};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Init(f64, f64, String),
    Clear,
    Rect(Bbox, RectStyle),
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
    fail_on_rect: Option<usize>,
}

impl Renderer for Recorder {
    fn init_surface(&mut self, width: f64, height: f64, background: &str) -> Result<(), RenderError> {
        self.calls.push(Call::Init(width, height, background.to_owned()));
        Ok(())
    }

    fn clear(&mut self) -> Result<(), RenderError> {
        self.calls.push(Call::Clear);
        Ok(())
    }

    fn draw_rect(&mut self, bbox: Bbox, style: &RectStyle) -> Result<(), RenderError> {
        let drawn = self.calls.iter().filter(|c| matches!(c, Call::Rect(..))).count();
        if self.fail_on_rect == Some(drawn) {
            return Err(RenderError::Backend("boom".into()));
        }
        self.calls.push(Call::Rect(bbox, *style));
        Ok(())
    }
}

fn rect_bboxes(calls: &[Call]) -> Vec<Bbox> {
    calls
        .iter()
        .filter_map(|c| match c {
            Call::Rect(b, _) => Some(*b),
            _ => None,
        })
        .collect()
}

#[test]
fn empty_doc_only_clears() {
    let mut r = Recorder::default();
    draw(&mut r, &DocStore::new()).unwrap();
    assert_eq!(r.calls, [Call::Clear]);
}

#[test]
fn clear_comes_first() {
    let mut doc = DocStore::new();
    doc.push(Shape::area("a", Point::new(0.0, 0.0), Size::new(10.0, 10.0), 0));
    let mut r = Recorder::default();
    draw(&mut r, &doc).unwrap();
    assert_eq!(r.calls.first(), Some(&Call::Clear));
    assert_eq!(r.calls.len(), 2);
}

#[test]
fn shapes_drawn_in_z_order_not_insertion_order() {
    let mut doc = DocStore::new();
    doc.push(Shape::rectangle("top", Point::new(1.0, 1.0), Size::new(1.0, 1.0), 5));
    doc.push(Shape::area("bottom", Point::new(2.0, 2.0), Size::new(2.0, 2.0), 0));
    let mut r = Recorder::default();
    draw(&mut r, &doc).unwrap();
    let xs: Vec<f64> = rect_bboxes(&r.calls).iter().map(|b| b.x).collect();
    assert_eq!(xs, [2.0, 1.0]);
}

#[test]
fn style_follows_highlight() {
    let mut doc = DocStore::new();
    let mut area = Shape::area("a", Point::new(0.0, 0.0), Size::new(10.0, 10.0), 0);
    area.set_highlighted(true);
    doc.push(area);
    let mut r = Recorder::default();
    draw(&mut r, &doc).unwrap();
    assert_eq!(
        r.calls[1],
        Call::Rect(Bbox { x: 0.0, y: 0.0, width: 10.0, height: 10.0 }, ShapeKind::Area.style(true))
    );
}

#[test]
fn backend_failure_stops_the_pass() {
    let mut doc = DocStore::new();
    doc.push(Shape::area("a", Point::new(0.0, 0.0), Size::new(10.0, 10.0), 0));
    doc.push(Shape::area("b", Point::new(0.0, 0.0), Size::new(10.0, 10.0), 1));
    let mut r = Recorder { fail_on_rect: Some(0), ..Default::default() };
    assert!(draw(&mut r, &doc).is_err());
    assert_eq!(r.calls, [Call::Clear]);
}

#[test]
fn renderer_is_object_safe() {
    let mut r = Recorder::default();
    let dyn_r: &mut dyn Renderer = &mut r;
    dyn_r.init_surface(800.0, 600.0, "#d7d7d7").unwrap();
    draw(dyn_r, &DocStore::new()).unwrap();
    assert_eq!(r.calls, [Call::Init(800.0, 600.0, "#d7d7d7".into()), Call::Clear]);
}
