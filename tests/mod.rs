/// Integration tests for tictac-league
///
/// Tests are organized into logical groupings:
/// - navigation: menu engine behaviour over small stub trees
/// - league: the real menu driven end to end against an in-memory database
mod league;
mod navigation;
mod support;
