//! Drag-and-nest whiteboard engine.
//!
//! Rectangles sit on a 2D surface and are dragged with a pointer. Whenever
//! one shape's bounds fall entirely inside another's, both are highlighted.
//! The engine owns the shapes, turns pointer events into moves, reruns the
//! containment scan after every move, and redraws through a [`render::Renderer`]
//! in z-index order. The browser canvas backend and the `wasm_bindgen` entry
//! point are thin adapters around that core.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Ordered shape collection and draw order |
//! | [`shape`] | Shape variants, style presets, containment predicate |
//! | [`geometry`] | Points, sizes, bounding boxes |
//! | [`input`] | Pointer events and the drag state machine |
//! | [`hit`] | Hit-testing under the pointer |
//! | [`containment`] | Pairwise containment scan driving highlights |
//! | [`render`] | Renderer trait and the scene draw pass |
//! | [`web`] | `<canvas>` 2D-context renderer |
//! | [`app`] | `wasm_bindgen` entry point and sample scene |
//! | [`config`] | Surface dimensions and background |
//! | [`error`] | Error types |
//! | [`consts`] | Style presets, cursors, surface defaults |

pub mod app;
pub mod config;
pub mod consts;
pub mod containment;
pub mod doc;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod render;
pub mod shape;
pub mod web;
