use crate::game_state::chess_types::Color;

/// The four independent castling permissions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white_short: bool,
    pub white_long: bool,
    pub black_short: bool,
    pub black_long: bool,
}

impl CastlingRights {
    pub const fn all() -> Self {
        Self {
            white_short: true,
            white_long: true,
            black_short: true,
            black_long: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            white_short: false,
            white_long: false,
            black_short: false,
            black_long: false,
        }
    }

    #[inline]
    pub const fn can_castle_short(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_short,
            Color::Black => self.black_short,
        }
    }

    #[inline]
    pub const fn can_castle_long(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_long,
            Color::Black => self.black_long,
        }
    }

    pub fn clear_short(&mut self, color: Color) {
        match color {
            Color::White => self.white_short = false,
            Color::Black => self.black_short = false,
        }
    }

    pub fn clear_long(&mut self, color: Color) {
        match color {
            Color::White => self.white_long = false,
            Color::Black => self.black_long = false,
        }
    }

    pub fn clear_both(&mut self, color: Color) {
        self.clear_short(color);
        self.clear_long(color);
    }
}

#[cfg(test)]
mod tests {
    use super::CastlingRights;
    use crate::game_state::chess_types::Color;

    #[test]
    fn clearing_one_side_leaves_the_other() {
        let mut rights = CastlingRights::all();
        rights.clear_both(Color::White);
        assert!(!rights.can_castle_short(Color::White));
        assert!(!rights.can_castle_long(Color::White));
        assert!(rights.can_castle_short(Color::Black));
        assert!(rights.can_castle_long(Color::Black));

        rights.clear_long(Color::Black);
        assert!(rights.can_castle_short(Color::Black));
        assert!(!rights.can_castle_long(Color::Black));
    }

    #[test]
    fn default_grants_nothing() {
        assert_eq!(CastlingRights::default(), CastlingRights::none());
    }
}
