// SPDX-License-Identifier: AGPL-3.0-or-later
//! Blockwright Core - Document model, block formatter and exporters
//!
//! This crate provides:
//! - The document record and the model that owns it while editing
//! - Writing metrics (words, reading time, characters)
//! - Content categories and their template blocks
//! - A block text formatter producing a small AST, with HTML and block text renderers
//! - Plain text, Markdown and HTML exports, and the live preview

pub mod ast;
pub mod document;
pub mod export;
pub mod formats;
pub mod metrics;
pub mod model;
pub mod preview;
pub mod templates;
pub mod traits;

pub use ast::{Block, Inline, ListItem, ListKind, Markup};
pub use document::{Document, Field, Status};
pub use export::{export, ExportArtifact, ExportError, ExportFormat, ExportMetadata};
pub use formats::format_html;
pub use metrics::Metrics;
pub use model::{DocumentModel, ModelError, ModelEvent, ModelObserver, ValidationIssue};
pub use preview::render_preview;
pub use templates::{Category, TemplateBlock};
pub use traits::{ConversionError, ParseConfig, Parser, RenderConfig, Renderer, Result};
