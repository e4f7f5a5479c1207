//! Knot topology for the knotwork workspace.
//!
//! A [`Knot`] is a closed, self-avoiding cycle of unit lattice edges plus
//! the player's current selection. All edits go through two command
//! families:
//!
//! - **Selection:** [`Knot::select`], [`Knot::deselect`],
//!   [`Knot::select_range`], [`Knot::clear_selection`].
//! - **Moves:** [`Knot::move_selection`] slides every selected run sideways;
//!   [`Knot::try_move`] computes the result without committing it and
//!   [`Knot::is_valid_move`] is the cheap pre-check.
//!
//! Every committed move leaves a structurally valid knot
//! ([`check_structure`]); a move that would not is rejected and leaves the
//! knot untouched.
//!
//! # Equality
//!
//! `Knot: PartialEq` compares shape only: two knots are equal when they
//! trace the same path up to translation, choice of start edge and
//! direction of traversal. [`Knot::congruent_to`] additionally allows
//! lattice rotations and reflections.
//!
//! # Notifications
//!
//! [`Knot::subscribe`] hands out a channel receiving a [`KnotEvent`] after
//! each committed structure or selection change.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod equality;
pub mod error;
pub mod events;
pub mod knot;
pub mod movement;
pub mod selection;
pub mod validity;

pub use equality::{Characteristic, Symmetries, Symmetry};
pub use error::{KnotError, MoveRejection};
pub use events::KnotEvent;
pub use knot::Knot;
pub use validity::{check_structure, is_valid_structure};
