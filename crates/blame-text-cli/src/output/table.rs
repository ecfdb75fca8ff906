//! Table formatting utilities for CLI output.

use blame_text::parser::{Piece, Template};
use comfy_table::{presets, ContentArrangement, Table};

/// Format the pieces of a scanned template as an ASCII table.
pub fn format_pieces_table(template: &Template) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Piece", "Function", "Parameter", "Modifier", "Span"]);

    for piece in &template.pieces {
        match piece {
            Piece::Literal(text) => {
                table.add_row(vec![
                    "literal".to_string(),
                    format!("{text:?}"),
                    String::new(),
                    String::new(),
                    String::new(),
                ]);
            }
            Piece::Token { token, span } => {
                table.add_row(vec![
                    "token".to_string(),
                    token.function.clone(),
                    token.parameter.clone(),
                    token.modifier.clone(),
                    format!("{}..{}", span.start, span.end),
                ]);
            }
        }
    }

    table
}
