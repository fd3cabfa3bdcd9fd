// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges
//! Phosphor glyph registry backing the icon picker.
//!
//! The CMS stores icon names in canonical kebab-case; this module maps those
//! names onto compiled-in Phosphor glyphs. It is UI-agnostic so both the
//! picker overlay and plain preview rendering can resolve names. Lookups
//! normalize their input first, so legacy PascalCase values stored by older
//! exports resolve to the same glyph as their canonical form.

use egui_phosphor::regular;

use crate::utils::kebab::to_kebab_case;

/// Glyph rendered for names the registry does not know.
pub const FALLBACK: &str = regular::QUESTION;

/// Canonical name → glyph, sorted by name. Lookup and the picker's per-letter
/// grouping both rely on this ordering; `tests::registry_is_sorted_and_canonical`
/// guards it.
const ICONS: &[(&str, &str)] = &[
    ("acorn", regular::ACORN),
    ("airplane", regular::AIRPLANE),
    ("airplane-takeoff", regular::AIRPLANE_TAKEOFF),
    ("alarm", regular::ALARM),
    ("anchor", regular::ANCHOR),
    ("aperture", regular::APERTURE),
    ("archive", regular::ARCHIVE),
    ("armchair", regular::ARMCHAIR),
    ("arrow-down", regular::ARROW_DOWN),
    ("arrow-left", regular::ARROW_LEFT),
    ("arrow-right", regular::ARROW_RIGHT),
    ("arrow-up", regular::ARROW_UP),
    ("asterisk", regular::ASTERISK),
    ("at", regular::AT),
    ("atom", regular::ATOM),
    ("baby", regular::BABY),
    ("backpack", regular::BACKPACK),
    ("bank", regular::BANK),
    ("barbell", regular::BARBELL),
    ("basket", regular::BASKET),
    ("basketball", regular::BASKETBALL),
    ("bathtub", regular::BATHTUB),
    ("battery-full", regular::BATTERY_FULL),
    ("bed", regular::BED),
    ("bell", regular::BELL),
    ("bicycle", regular::BICYCLE),
    ("binoculars", regular::BINOCULARS),
    ("bird", regular::BIRD),
    ("book", regular::BOOK),
    ("book-open", regular::BOOK_OPEN),
    ("bookmark", regular::BOOKMARK),
    ("brain", regular::BRAIN),
    ("briefcase", regular::BRIEFCASE),
    ("broadcast", regular::BROADCAST),
    ("browser", regular::BROWSER),
    ("bug", regular::BUG),
    ("buildings", regular::BUILDINGS),
    ("bus", regular::BUS),
    ("butterfly", regular::BUTTERFLY),
    ("cactus", regular::CACTUS),
    ("cake", regular::CAKE),
    ("calculator", regular::CALCULATOR),
    ("calendar", regular::CALENDAR),
    ("camera", regular::CAMERA),
    ("campfire", regular::CAMPFIRE),
    ("car", regular::CAR),
    ("cat", regular::CAT),
    ("certificate", regular::CERTIFICATE),
    ("chart-bar", regular::CHART_BAR),
    ("chart-line", regular::CHART_LINE),
    ("chart-pie", regular::CHART_PIE),
    ("chat-circle", regular::CHAT_CIRCLE),
    ("check", regular::CHECK),
    ("check-circle", regular::CHECK_CIRCLE),
    ("circle", regular::CIRCLE),
    ("clipboard", regular::CLIPBOARD),
    ("clock", regular::CLOCK),
    ("cloud", regular::CLOUD),
    ("coffee", regular::COFFEE),
    ("coin", regular::COIN),
    ("compass", regular::COMPASS),
    ("cookie", regular::COOKIE),
    ("cpu", regular::CPU),
    ("credit-card", regular::CREDIT_CARD),
    ("crown", regular::CROWN),
    ("cube", regular::CUBE),
    ("database", regular::DATABASE),
    ("desktop", regular::DESKTOP),
    ("detective", regular::DETECTIVE),
    ("device-mobile", regular::DEVICE_MOBILE),
    ("diamond", regular::DIAMOND),
    ("dog", regular::DOG),
    ("door", regular::DOOR),
    ("download", regular::DOWNLOAD),
    ("drop", regular::DROP),
    ("egg", regular::EGG),
    ("envelope", regular::ENVELOPE),
    ("eraser", regular::ERASER),
    ("eye", regular::EYE),
    ("eye-slash", regular::EYE_SLASH),
    ("factory", regular::FACTORY),
    ("feather", regular::FEATHER),
    ("file", regular::FILE),
    ("fingerprint", regular::FINGERPRINT),
    ("fire", regular::FIRE),
    ("first-aid", regular::FIRST_AID),
    ("fish", regular::FISH),
    ("flag", regular::FLAG),
    ("flashlight", regular::FLASHLIGHT),
    ("flask", regular::FLASK),
    ("floppy-disk", regular::FLOPPY_DISK),
    ("flower", regular::FLOWER),
    ("folder", regular::FOLDER),
    ("folder-open", regular::FOLDER_OPEN),
    ("fork-knife", regular::FORK_KNIFE),
    ("funnel", regular::FUNNEL),
    ("game-controller", regular::GAME_CONTROLLER),
    ("gas-pump", regular::GAS_PUMP),
    ("gear", regular::GEAR),
    ("ghost", regular::GHOST),
    ("gift", regular::GIFT),
    ("globe", regular::GLOBE),
    ("graduation-cap", regular::GRADUATION_CAP),
    ("guitar", regular::GUITAR),
    ("hammer", regular::HAMMER),
    ("hand", regular::HAND),
    ("handshake", regular::HANDSHAKE),
    ("hard-drive", regular::HARD_DRIVE),
    ("hash", regular::HASH),
    ("headphones", regular::HEADPHONES),
    ("heart", regular::HEART),
    ("heartbeat", regular::HEARTBEAT),
    ("hexagon", regular::HEXAGON),
    ("horse", regular::HORSE),
    ("hourglass", regular::HOURGLASS),
    ("house", regular::HOUSE),
    ("ice-cream", regular::ICE_CREAM),
    ("image", regular::IMAGE),
    ("infinity", regular::INFINITY),
    ("info", regular::INFO),
    ("key", regular::KEY),
    ("keyboard", regular::KEYBOARD),
    ("knife", regular::KNIFE),
    ("ladder", regular::LADDER),
    ("lamp", regular::LAMP),
    ("laptop", regular::LAPTOP),
    ("leaf", regular::LEAF),
    ("lightbulb", regular::LIGHTBULB),
    ("lightning", regular::LIGHTNING),
    ("link", regular::LINK),
    ("list", regular::LIST),
    ("lock", regular::LOCK),
    ("lock-open", regular::LOCK_OPEN),
    ("magnet", regular::MAGNET),
    ("magnifying-glass", regular::MAGNIFYING_GLASS),
    ("map-pin", regular::MAP_PIN),
    ("medal", regular::MEDAL),
    ("megaphone", regular::MEGAPHONE),
    ("microphone", regular::MICROPHONE),
    ("microscope", regular::MICROSCOPE),
    ("moon", regular::MOON),
    ("motorcycle", regular::MOTORCYCLE),
    ("mountains", regular::MOUNTAINS),
    ("music-note", regular::MUSIC_NOTE),
    ("newspaper", regular::NEWSPAPER),
    ("note", regular::NOTE),
    ("notebook", regular::NOTEBOOK),
    ("nut", regular::NUT),
    ("package", regular::PACKAGE),
    ("paint-brush", regular::PAINT_BRUSH),
    ("palette", regular::PALETTE),
    ("paper-plane", regular::PAPER_PLANE),
    ("paperclip", regular::PAPERCLIP),
    ("pause", regular::PAUSE),
    ("paw-print", regular::PAW_PRINT),
    ("pen", regular::PEN),
    ("pencil", regular::PENCIL),
    ("phone", regular::PHONE),
    ("piggy-bank", regular::PIGGY_BANK),
    ("pill", regular::PILL),
    ("pizza", regular::PIZZA),
    ("planet", regular::PLANET),
    ("plant", regular::PLANT),
    ("play", regular::PLAY),
    ("plug", regular::PLUG),
    ("plus", regular::PLUS),
    ("power", regular::POWER),
    ("printer", regular::PRINTER),
    ("push-pin", regular::PUSH_PIN),
    ("puzzle-piece", regular::PUZZLE_PIECE),
    ("qr-code", regular::QR_CODE),
    ("question", regular::QUESTION),
    ("queue", regular::QUEUE),
    ("radio", regular::RADIO),
    ("rainbow", regular::RAINBOW),
    ("receipt", regular::RECEIPT),
    ("recycle", regular::RECYCLE),
    ("robot", regular::ROBOT),
    ("rocket", regular::ROCKET),
    ("rocket-launch", regular::ROCKET_LAUNCH),
    ("rows", regular::ROWS),
    ("rss", regular::RSS),
    ("ruler", regular::RULER),
    ("scales", regular::SCALES),
    ("scissors", regular::SCISSORS),
    ("screwdriver", regular::SCREWDRIVER),
    ("scroll", regular::SCROLL),
    ("shapes", regular::SHAPES),
    ("share", regular::SHARE),
    ("shield", regular::SHIELD),
    ("shield-check", regular::SHIELD_CHECK),
    ("shopping-bag", regular::SHOPPING_BAG),
    ("shopping-cart", regular::SHOPPING_CART),
    ("shower", regular::SHOWER),
    ("skull", regular::SKULL),
    ("sliders", regular::SLIDERS),
    ("smiley", regular::SMILEY),
    ("snowflake", regular::SNOWFLAKE),
    ("soccer-ball", regular::SOCCER_BALL),
    ("sparkle", regular::SPARKLE),
    ("speaker-high", regular::SPEAKER_HIGH),
    ("spinner", regular::SPINNER),
    ("square", regular::SQUARE),
    ("stack", regular::STACK),
    ("stairs", regular::STAIRS),
    ("star", regular::STAR),
    ("stethoscope", regular::STETHOSCOPE),
    ("sticker", regular::STICKER),
    ("stop", regular::STOP),
    ("storefront", regular::STOREFRONT),
    ("student", regular::STUDENT),
    ("suitcase", regular::SUITCASE),
    ("sun", regular::SUN),
    ("sword", regular::SWORD),
    ("syringe", regular::SYRINGE),
    ("t-shirt", regular::T_SHIRT),
    ("table", regular::TABLE),
    ("tag", regular::TAG),
    ("target", regular::TARGET),
    ("taxi", regular::TAXI),
    ("television", regular::TELEVISION),
    ("tennis-ball", regular::TENNIS_BALL),
    ("tent", regular::TENT),
    ("terminal", regular::TERMINAL),
    ("test-tube", regular::TEST_TUBE),
    ("thermometer", regular::THERMOMETER),
    ("thumbs-down", regular::THUMBS_DOWN),
    ("thumbs-up", regular::THUMBS_UP),
    ("ticket", regular::TICKET),
    ("timer", regular::TIMER),
    ("toolbox", regular::TOOLBOX),
    ("tooth", regular::TOOTH),
    ("tote", regular::TOTE),
    ("tractor", regular::TRACTOR),
    ("train", regular::TRAIN),
    ("tram", regular::TRAM),
    ("translate", regular::TRANSLATE),
    ("trash", regular::TRASH),
    ("tray", regular::TRAY),
    ("tree", regular::TREE),
    ("trend-up", regular::TREND_UP),
    ("triangle", regular::TRIANGLE),
    ("trophy", regular::TROPHY),
    ("truck", regular::TRUCK),
    ("umbrella", regular::UMBRELLA),
    ("upload", regular::UPLOAD),
    ("user", regular::USER),
    ("user-circle", regular::USER_CIRCLE),
    ("users", regular::USERS),
    ("van", regular::VAN),
    ("vault", regular::VAULT),
    ("video-camera", regular::VIDEO_CAMERA),
    ("virus", regular::VIRUS),
    ("wall", regular::WALL),
    ("wallet", regular::WALLET),
    ("warning", regular::WARNING),
    ("watch", regular::WATCH),
    ("waves", regular::WAVES),
    ("wheelchair", regular::WHEELCHAIR),
    ("wifi-high", regular::WIFI_HIGH),
    ("wind", regular::WIND),
    ("wine", regular::WINE),
    ("wrench", regular::WRENCH),
    ("x", regular::X),
    ("x-circle", regular::X_CIRCLE),
    ("yin-yang", regular::YIN_YANG),
];

/// All selectable entries as `(canonical name, glyph)`, in canonical order.
pub fn all() -> &'static [(&'static str, &'static str)] {
    ICONS
}

/// Resolve a stored icon name to its glyph. The input is normalized first,
/// so `"RocketLaunch"` and `"rocket-launch"` resolve identically.
pub fn glyph(name: &str) -> Option<&'static str> {
    let canonical = to_kebab_case(name.trim());
    ICONS
        .binary_search_by_key(&canonical.as_str(), |&(name, _)| name)
        .ok()
        .map(|idx| ICONS[idx].1)
}

/// Like [`glyph`], but renders unknown names with the fallback glyph instead
/// of nothing.
pub fn glyph_or_fallback(name: &str) -> &'static str {
    glyph(name).unwrap_or(FALLBACK)
}
