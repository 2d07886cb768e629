// Test module for lexer
//
// Tests are organized by category: single tokens, then whole expressions.
