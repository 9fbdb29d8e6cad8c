//! ASCII art for the desserts
//!
//! Every piece is at most [`ART_WIDTH`] columns wide and [`ART_HEIGHT`] rows tall.

use crate::catalog::DessertImage;

pub const ART_WIDTH: u16 = 16;
pub const ART_HEIGHT: u16 = 7;

/// Art lines for a dessert image
pub fn dessert_art(image: DessertImage) -> &'static [&'static str] {
    match image {
        DessertImage::Cupcake => &[
            "      _,_      ",
            "    (  o  )    ",
            "   (~~~~~~~)   ",
            "  (~~~~~~~~~)  ",
            "   |\\|/\\|/|   ",
            "   |/\\|/\\|/|  ",
            "    \\______/   ",
        ],
        DessertImage::Donut => &[
            "    .-\"\"\"-.    ",
            "  .'  ' .  '.  ",
            " /  .-\"\"-. ' \\ ",
            "|  /      \\   |",
            " \\ '-.__.-' . /",
            "  '. '   .  .' ",
            "    '-...-'    ",
        ],
        DessertImage::Eclair => &[
            "               ",
            "   __________  ",
            "  /##########\\ ",
            " (############)",
            "  \\~~~~~~~~~~/ ",
            "   ''''''''''  ",
            "               ",
        ],
        DessertImage::Froyo => &[
            "       (       ",
            "      ( )      ",
            "    (~~~~~)    ",
            "   (~~~~~~~)   ",
            "    \\#####/    ",
            "     \\###/     ",
            "      \\#/      ",
        ],
        DessertImage::Gingerbread => &[
            "     .---.     ",
            "    ( o o )    ",
            " ._  \\_-_/  _. ",
            "(__  .'*'.  __)",
            "    (  *  )    ",
            "    /  _  \\    ",
            "   (__/ \\__)   ",
        ],
        DessertImage::Honeycomb => &[
            "   __    __    ",
            "  /  \\__/  \\   ",
            "  \\__/  \\__/   ",
            "  /  \\__/  \\   ",
            "  \\__/  \\__/   ",
            "     \\__/      ",
            "               ",
        ],
        DessertImage::IceCreamSandwich => &[
            "               ",
            " ############# ",
            " #:#:#:#:#:#:# ",
            " ~~~~~~~~~~~~~ ",
            " ~~~~~~~~~~~~~ ",
            " #:#:#:#:#:#:# ",
            " ############# ",
        ],
        DessertImage::JellyBean => &[
            "               ",
            "    .--.       ",
            "   (    '.  _  ",
            "    '.    `( ) ",
            "      '.__.'   ",
            "   (o)   (_)   ",
            "               ",
        ],
        DessertImage::KitKat => &[
            " _____________ ",
            "|   |   |   | |",
            "|   |   |   | |",
            "|  KIT  KAT | |",
            "|   |   |   | |",
            "|___|___|___|_|",
            "               ",
        ],
        DessertImage::Lollipop => &[
            "    .-\"\"-.     ",
            "   / @ @@ \\    ",
            "   \\ @@ @ /    ",
            "    '-..-'     ",
            "      ||       ",
            "      ||       ",
            "      ||       ",
        ],
        DessertImage::Marshmallow => &[
            "               ",
            "   .-------.   ",
            "  (         )  ",
            "  |'-------'|  ",
            "  |         |  ",
            "  '-._____.-'  ",
            "               ",
        ],
        DessertImage::Nougat => &[
            "               ",
            "  ___________  ",
            " /o .  o . o/| ",
            "/___________/ |",
            "| o  .  o  | / ",
            "|__________|/  ",
            "               ",
        ],
        DessertImage::Oreo => &[
            "   .-\"\"\"\"-.    ",
            "  / ####### \\  ",
            "  |=========|  ",
            "  |=========|  ",
            "  \\ ####### /  ",
            "   '-.....-'   ",
            "               ",
        ],
    }
}
