// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests may unwrap and index freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! CPU-side mesh preparation and camera navigation for real-time rendering
//! demos.
//!
//! Two independent pipelines feed the rendering boundary each frame:
//!
//! - **Mesh**: [`mesh::parse_obj`] reads triangulated model text into
//!   attribute tables, [`mesh::ObjModel::expand`] resolves it into one
//!   vertex per triangle corner, and [`mesh::build_indexed_mesh`] collapses
//!   bit-identical corners into a vertex buffer plus index buffer.
//! - **Camera**: [`input::InputProcessor`] folds window events into a
//!   [`input::FrameInput`], which [`camera::CameraController::update`]
//!   consumes once per frame to produce projection and view matrices.
//!
//! [`options::Options`] holds camera, key-binding and import settings and
//! round-trips through TOML.
//!
//! # Example
//!
//! ```
//! use meshcam::camera::CameraController;
//! use meshcam::input::FrameInput;
//! use meshcam::mesh::{build_indexed_mesh, import_obj};
//! use meshcam::options::ImportOptions;
//!
//! let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nvn 0 0 1\n\
//!             f 1/1/1 2/1/1 3/1/1\nf 3/1/1 2/1/1 1/1/1\n";
//! let stream = import_obj(text, &ImportOptions::default())?;
//! let mesh = build_indexed_mesh(&stream)?;
//! assert_eq!(mesh.vertices.len(), 3);
//! assert_eq!(mesh.indices, [0, 1, 2, 2, 1, 0]);
//!
//! let mut camera = CameraController::new();
//! let matrices = camera.update(1.0 / 60.0, &mut FrameInput::default(), 4.0 / 3.0);
//! let _mvp = matrices.view_projection();
//! # Ok::<(), meshcam::MeshcamError>(())
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod mesh;
pub mod options;

pub use error::{MeshcamError, ParseError};
