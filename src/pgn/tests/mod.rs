//! Test fixtures for PGN parsing
//!
//! Game blocks shaped like Chess.com monthly archive downloads.


/// Build a Chess.com style game block
pub fn chess_com_game(
    white: &str,
    black: &str,
    result: &str,
    time_control: &str,
    utc_date: &str,
) -> String {
    format!(
        "[Event \"Live Chess\"]\n\
         [Site \"Chess.com\"]\n\
         [Date \"{date}\"]\n\
         [Round \"-\"]\n\
         [White \"{white}\"]\n\
         [Black \"{black}\"]\n\
         [Result \"{result}\"]\n\
         [WhiteElo \"1500\"]\n\
         [BlackElo \"1450\"]\n\
         [TimeControl \"{time_control}\"]\n\
         [UTCDate \"{date}\"]\n\
         [UTCTime \"18:04:11\"]\n\
         [Termination \"{white} won by resignation\"]\n\
         \n\
         1. e4 {{[%clk 0:02:59.9]}} 1... e5 {{[%clk 0:02:58.1]}} 2. Nf3 {{[%clk 0:02:57]}} \
         2... Nc6 {{[%clk 0:02:55.4]}} 3. Bb5 {{[%clk 0:02:50]}} 3... a6 {{[%clk 0:02:49]}} {result}\n",
        date = utc_date,
    )
}
