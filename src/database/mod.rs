//! Decoder database
//!
//! The database manages decoding-capable codec instances for one receive
//! pipeline: which payload types are decodable, which of them are backed by
//! externally supplied decoders, and the single live decoder instance.
//!
//! # Architecture
//!
//! ```text
//!                      DecoderDatabase
//!        ┌──────────────────────────────────────────┐
//!        │ registrations:     payload type →        │
//!        │                    CodecRegistration     │
//!        │ external_decoders: payload type →        │
//!        │                    ExternalDecoderHandle │
//!        │ active slot:       payload type,         │
//!        │                    settings snapshot,    │
//!        │                    GenericDecoder        │
//!        └───────┬──────────────────────┬───────────┘
//!                │                      │
//!     control plane                decode plane
//!     register_receive_codec()     decoder_for_frame()
//!     register_external_decoder()    │ hit  → bound instance
//!     deregister_*()                 │ miss → teardown + construct
//!                                    ▼
//!                              DecoderFactory / external handle
//! ```
//!
//! Control operations mutate the two tables; frame arrival probes the
//! active slot and a miss triggers construction, which reads both tables,
//! obtains an instance, initializes it and commits it to the slot.
//!
//! The database is single-owner: no internal locking, all operations
//! synchronous. Callers racing control-plane mutations against decode-plane
//! lookups must funnel both onto the same sequential execution context.

pub mod entry;
pub mod store;

pub use entry::{CodecRegistration, DatabaseStats};
pub use store::DecoderDatabase;
