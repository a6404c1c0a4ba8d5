use crate::game_state::board::Board;
use crate::game_state::castling_rights::CastlingRights;
use crate::game_state::chess_types::{Color, Coords};
use crate::game_state::position::Position;

pub fn generate_fen(position: &Position) -> String {
    let board = generate_board_field(&position.board);
    let side_to_move = match position.color_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(&position.castling_rights);
    let en_passant = position
        .en_passant_target
        .map_or_else(|| "-".to_owned(), |target| target.to_string());

    format!(
        "{} {} {} {} {} {}",
        board,
        side_to_move,
        castling,
        en_passant,
        position.halfmove_clock,
        position.fullmove_number
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            if let Some(piece) = board.piece_at(Coords::new(file, rank)) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.fen_char());
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: &CastlingRights) -> String {
    let mut out = String::new();

    if rights.white_short {
        out.push('K');
    }
    if rights.white_long {
        out.push('Q');
    }
    if rights.black_short {
        out.push('k');
    }
    if rights.black_long {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::castling_rights::CastlingRights;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{Color, Coords};
    use crate::game_state::position::Position;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn round_trip_starting_position_fen() {
        let parsed = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        let generated = generate_fen(&parsed);

        assert_eq!(generated, STARTING_POSITION_FEN);

        let reparsed = parse_fen(&generated).expect("generated FEN should parse");
        assert_eq!(reparsed, parsed);
    }

    #[test]
    fn round_trip_custom_position_fen() {
        let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6";
        let parsed = parse_fen(fen).expect("custom FEN should parse");
        let generated = generate_fen(&parsed);

        assert_eq!(generated, fen);
        assert_eq!(parsed.color_to_move, Color::Black);
        assert_eq!(
            parsed.castling_rights,
            CastlingRights {
                black_short: true,
                black_long: true,
                ..CastlingRights::none()
            }
        );
        assert_eq!(parsed.halfmove_clock, 4);
        assert_eq!(parsed.fullmove_number, 6);
    }

    #[test]
    fn committed_moves_update_every_field() {
        let mut position = Position::new_game();
        let e4 = position
            .find_legal_move(Coords::new(4, 1), Coords::new(4, 3), None)
            .expect("e4 is legal");
        position.commit_move(e4);
        assert_eq!(
            generate_fen(&position),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );

        let nf6 = position
            .find_legal_move(Coords::new(6, 7), Coords::new(5, 5), None)
            .expect("Nf6 is legal");
        position.commit_move(nf6);
        assert_eq!(
            generate_fen(&position),
            "rnbqkb1r/pppppppp/5n2/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 1 2"
        );
    }
}
