//! The rendering pipeline.
//!
//! Stages, in the order a frame runs them:
//! - [`viewfit`]: translate and scale the scene into canvas space
//! - [`visibility`]: back-face culling
//! - [`shading`]: ambient + directional Lambertian shading
//! - [`edge_list`]: per-scanline left/right boundaries of a triangle
//! - [`compositor`]: depth-tested span filling into a [`FrameBuffer`]
//!
//! [`Renderer`] strings them together and owns the buffers.

pub mod compositor;
pub mod edge_list;
pub mod framebuffer;
pub mod renderer;
pub mod shading;
pub mod viewfit;
pub mod visibility;

pub use compositor::composite;
pub use edge_list::{compute_clipped_edge_list, compute_edge_list, EdgeList, EdgeRow};
pub use framebuffer::FrameBuffer;
pub use renderer::{render_frame, FrameStats, Renderer};
pub use shading::shade;
pub use viewfit::{bounding_box, fit_to_canvas, scale_scene, translate_scene, BoundingBox};
pub use visibility::{is_hidden, unit_normal};
