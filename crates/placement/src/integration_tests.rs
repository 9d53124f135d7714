//! Integration tests for the placement editor using the `TestEditor` harness.
//!
//! These tests drive a headless Bevy App through `EditorInput` events and
//! check the editor state, the emitted `EditorEvent`s and the `EditorLog`.
