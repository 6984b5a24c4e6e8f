//! WASM bindings for draughts-fen
//!
//! Provides a JavaScript-friendly API for the codec and the grid factory.
//! Positions cross the boundary as plain objects shaped like [`GamePosition`].

use wasm_bindgen::prelude::*;

use crate::{empty_grid, starting_grid, FenCodec, GamePosition};

/// WASM-friendly wrapper around FenCodec
#[wasm_bindgen(js_name = FenParser)]
pub struct WasmFenParser {
    inner: FenCodec,
}

#[wasm_bindgen(js_class = FenParser)]
impl WasmFenParser {
    /// Create a parser for boards of `board_size` x `board_size`
    #[wasm_bindgen(constructor)]
    pub fn new(board_size: usize) -> Result<WasmFenParser, JsError> {
        Ok(WasmFenParser {
            inner: FenCodec::new(board_size)?,
        })
    }

    #[wasm_bindgen(getter, js_name = boardSize)]
    pub fn board_size(&self) -> usize {
        self.inner.board_size()
    }

    /// Decode notation into `{ color_to_move, position }`
    #[wasm_bindgen(js_name = fenToPosition)]
    pub fn fen_to_position(&self, fen: &str) -> Result<JsValue, JsError> {
        let game = self.inner.decode(fen)?;
        Ok(serde_wasm_bindgen::to_value(&game)?)
    }

    /// Encode a `{ color_to_move, position }` object as notation
    #[wasm_bindgen(js_name = positionToFen)]
    pub fn position_to_fen(&self, game: JsValue) -> Result<String, JsError> {
        let game: GamePosition = serde_wasm_bindgen::from_value(game)?;
        Ok(self.inner.encode(&game)?)
    }
}

/// Empty `size` x `size` grid
#[wasm_bindgen(js_name = newPosition)]
pub fn new_position(size: usize) -> Result<JsValue, JsError> {
    Ok(serde_wasm_bindgen::to_value(&empty_grid(size))?)
}

/// Grid with both sides' men in their starting rows
#[wasm_bindgen(js_name = newStartingPosition)]
pub fn new_starting_position(size: usize) -> Result<JsValue, JsError> {
    Ok(serde_wasm_bindgen::to_value(&starting_grid(size))?)
}
