/// The closed set of characters a frame may contain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Glyph {
    #[default]
    Blank,
    /// Dense point shading.
    Dot,
    /// Sparse point shading.
    Cross,
    /// Equator and latitude lines.
    Parallel,
    /// Meridian and longitude lines.
    Meridian,
}

impl Glyph {
    pub const ALL: [Glyph; 5] = [
        Glyph::Blank,
        Glyph::Dot,
        Glyph::Cross,
        Glyph::Parallel,
        Glyph::Meridian,
    ];

    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Glyph::Blank => ' ',
            Glyph::Dot => '.',
            Glyph::Cross => '+',
            Glyph::Parallel => '-',
            Glyph::Meridian => '|',
        }
    }

    #[inline]
    pub fn from_char(c: char) -> Option<Glyph> {
        Glyph::ALL.into_iter().find(|g| g.as_char() == c)
    }

    #[inline]
    pub fn is_blank(self) -> bool {
        self == Glyph::Blank
    }
}

impl From<Glyph> for char {
    fn from(g: Glyph) -> char {
        g.as_char()
    }
}
