//! Common patterns
//!
//! Process-wide compiled patterns, built on first use and never mutated.
//! Pass them to [`RegExpValidator`](crate::leaf::RegExpValidator) or the
//! factory functions.
//!
//! ```rust
//! use fieldcheck::regexp;
//!
//! assert!(regexp::NUMBER.is_match("0120123123"));
//! assert!(!regexp::NUMBER.is_match("０１２０"));
//! ```

use regex::Regex;
use std::sync::LazyLock;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}

/// UUID version 4, lowercase hex. Unanchored.
pub static UUID_V4: LazyLock<Regex> = LazyLock::new(|| {
    compile("[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}")
});

/// AWS CloudFormation stack name: a letter, then letters, digits or `-`.
pub static CFN_STACK_NAME: LazyLock<Regex> = LazyLock::new(|| compile("^[A-Za-z][A-Za-z0-9-]*$"));

/// One or more ASCII digits.
pub static NUMBER: LazyLock<Regex> = LazyLock::new(|| compile("^[0-9]+$"));

/// Zero or more ASCII letters or digits.
pub static ALPHANUMERIC: LazyLock<Regex> = LazyLock::new(|| compile("^[a-zA-Z0-9]*$"));

/// Full-width text: no printable ASCII and no half-width katakana.
pub static UTF8_ZENKAKU_AND_RETURN: LazyLock<Regex> =
    LazyLock::new(|| compile("^[^ -~｡-ﾟ]+$"));

/// Zero or more lowercase ASCII letters or digits.
pub static ALPHANUMERIC_LOWER: LazyLock<Regex> = LazyLock::new(|| compile("^[0-9a-z]*$"));

/// One or more printable ASCII characters (space through `~`).
pub static ASCII: LazyLock<Regex> = LazyLock::new(|| compile(r"^[\x20-\x7E]+$"));

/// CSS named colors, plus `transparent`.
const CSS_COLOR_KEYWORDS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque",
    "black", "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue",
    "chartreuse", "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson",
    "cyan", "darkblue", "darkcyan", "darkgoldenrod", "darkgray", "darkgreen",
    "darkgrey", "darkkhaki", "darkmagenta", "darkolivegreen", "darkorange",
    "darkorchid", "darkred", "darksalmon", "darkseagreen", "darkslateblue",
    "darkslategray", "darkslategrey", "darkturquoise", "darkviolet", "deeppink",
    "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick", "floralwhite",
    "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod", "gray",
    "green", "greenyellow", "grey", "honeydew", "hotpink", "indianred", "indigo",
    "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon",
    "lightblue", "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray",
    "lightgreen", "lightgrey", "lightpink", "lightsalmon", "lightseagreen",
    "lightskyblue", "lightslategray", "lightslategrey", "lightsteelblue",
    "lightyellow", "lime", "limegreen", "linen", "magenta", "maroon",
    "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple", "mediumseagreen",
    "mediumslateblue", "mediumspringgreen", "mediumturquoise", "mediumvioletred",
    "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite", "navy",
    "oldlace", "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod",
    "palegreen", "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru",
    "pink", "plum", "powderblue", "purple", "rebeccapurple", "red", "rosybrown",
    "royalblue", "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell",
    "sienna", "silver", "skyblue", "slateblue", "slategray", "slategrey", "snow",
    "springgreen", "steelblue", "tan", "teal", "thistle", "tomato", "turquoise",
    "violet", "wheat", "white", "whitesmoke", "yellow", "yellowgreen", "transparent",
];

/// CSS colors: hex (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`), `rgb()`/`rgba()`,
/// `hsl()`/`hsla()`, and the CSS named colors such as `aliceblue`, in any case.
pub static HTML_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        concat!(
            r"^(?:",
            r"#(?:[0-9a-fA-F]{{3,4}}|[0-9a-fA-F]{{6}}|[0-9a-fA-F]{{8}})",
            r"|rgba?\(\s*\d{{1,3}}%?\s*,\s*\d{{1,3}}%?\s*,\s*\d{{1,3}}%?\s*(?:,\s*\d*(?:\.\d+)?%?\s*)?\)",
            r"|hsla?\(\s*\d{{1,3}}(?:deg)?\s*,\s*\d{{1,3}}%\s*,\s*\d{{1,3}}%\s*(?:,\s*\d*(?:\.\d+)?%?\s*)?\)",
            r"|(?i:{})",
            r")$"
        ),
        CSS_COLOR_KEYWORDS.join("|")
    );
    compile(&pattern)
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_v4() {
        assert!(UUID_V4.is_match("3b241101-e2bb-4255-8caf-4136c566a962"));
        assert!(!UUID_V4.is_match("3b241101-e2bb-4255-8caf"));
        assert!(!UUID_V4.is_match("3B241101-E2BB-4255-8CAF-4136C566A962"));
    }

    #[test]
    fn cfn_stack_name() {
        assert!(CFN_STACK_NAME.is_match("my-stack-1"));
        assert!(!CFN_STACK_NAME.is_match("1-stack"));
        assert!(!CFN_STACK_NAME.is_match("my_stack"));
    }

    #[test]
    fn zenkaku() {
        assert!(UTF8_ZENKAKU_AND_RETURN.is_match("北海道"));
        assert!(UTF8_ZENKAKU_AND_RETURN.is_match("　"));
        assert!(!UTF8_ZENKAKU_AND_RETURN.is_match("ﾎｯｶｲﾄﾞｳ"));
        assert!(!UTF8_ZENKAKU_AND_RETURN.is_match(""));
    }

    #[test]
    fn ascii() {
        assert!(ASCII.is_match("!#$%&123 ~"));
        assert!(!ASCII.is_match("tab\there"));
        assert!(!ASCII.is_match(""));
    }

    #[test]
    fn html_color() {
        for color in [
            "#FFF",
            "#000000",
            "#ffffff",
            "#FFFF",
            "rgb(255, 0, 0, 0.3)",
            "rgba(255, 0, 0, 3)",
            "hsl(120, 100%, 500%)",
            "hsla(120, 100%, 75%, 40)",
            "aliceblue",
            "AliceBlue",
            "rebeccapurple",
        ] {
            assert!(HTML_COLOR.is_match(color), "{} should match", color);
        }
        for color in [
            "tokyo",
            "blues",
            "###",
            "0x123",
            "hslv(120,  60%, 70%, 2)",
            "rgb(0, 0, #AAA)",
            "#FFFFF",
        ] {
            assert!(!HTML_COLOR.is_match(color), "{} should not match", color);
        }
    }
}
