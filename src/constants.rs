//! Application-wide constants
//!
//! Single source of truth for the built-in descriptor: the color palette,
//! layout theme values, bar geometry, external commands, and config paths.

/// Color palette shared by layouts, the bar, and its widgets
pub mod palette {
    use crate::common::HexColor;

    /// Bar background
    pub const BG_BAR: HexColor = HexColor::from_argb32(0xFF21_2121);

    /// Background of unfocused UI elements
    pub const BG_INACTIVE: HexColor = HexColor::from_argb32(0xFF5C_5C5C);

    /// Border of the focused window
    pub const BORDER_ACTIVE: HexColor = HexColor::from_argb32(0xFF75_7575);

    /// Border of unfocused windows
    pub const BORDER_INACTIVE: HexColor = HexColor::from_argb32(0xFF42_4242);

    /// Primary text color
    pub const TEXT_MAIN: HexColor = HexColor::from_argb32(0xFFAB_ABAB);

    /// Dimmed text color
    pub const TEXT_DIM: HexColor = HexColor::from_argb32(0xFF40_4040);

    /// Accent color (CPU/memory readouts, stacked focus border)
    pub const ACCENT: HexColor = HexColor::from_argb32(0xFF99_9694);
}

/// Shared layout theme defaults
pub mod layout {
    /// Window border thickness in pixels
    pub const BORDER_WIDTH: u16 = 3;

    /// Gap around tiled windows in pixels
    pub const MARGIN: u16 = 6;
}

/// Status bar defaults
pub mod bar {
    /// Bar height in pixels
    pub const HEIGHT: u16 = 28;

    /// Default widget font family
    pub const FONT: &str = "sans";

    /// Default widget font size
    pub const FONT_SIZE: u16 = 12;

    /// Default widget padding in pixels
    pub const PADDING: u16 = 3;

    /// Window title truncation length for the WindowName widget
    pub const WINDOW_NAME_MAX_CHARS: usize = 40;

    /// Clock widget strftime format
    pub const CLOCK_FORMAT: &str = "%Y-%m-%d %a %H:%M:%S";

    /// CPU widget format ({load_percent} is substituted by the host)
    pub const CPU_FORMAT: &str = "CPU {load_percent}%";

    /// Memory widget format ({mem_used}/{mem_total} are substituted by the host)
    pub const MEMORY_FORMAT: &str = "{mem_used}M/{mem_total}M";
}

/// External programs referenced by default bindings and the startup hook
pub mod commands {
    /// Default terminal emulator
    pub const TERMINAL: &str = "gnome-terminal";

    /// Application launcher invocation
    pub const LAUNCHER: &[&str] = &["rofi", "-show", "drun"];

    /// Region screenshot tool (copies to clipboard)
    pub const SCREENSHOT_REGION: &[&str] = &["xfce4-screenshooter", "-r", "-c"];

    /// Region screenshot via imagemagick, piped to the clipboard
    pub const SCREENSHOT_IMAGEMAGICK: &str =
        "import -silent png:- | xclip -selection clipboard -t image/png -quiet";

    /// Keyboard layout toggle (us/ru on alt+shift)
    pub const KEYBOARD_LAYOUT: &[&str] = &[
        "setxkbmap",
        "-layout",
        "us,ru",
        "-option",
        "grp:alt_shift_toggle",
    ];

    /// Volume mixer GUI opened from the Volume widget
    pub const VOLUME_MIXER: &[&str] = &["pavucontrol"];

    /// Volume widget scroll/click actions
    pub const VOLUME_RAISE: &[&str] = &["amixer", "set", "Master", "5%+"];
    pub const VOLUME_LOWER: &[&str] = &["amixer", "set", "Master", "5%-"];
    pub const VOLUME_MUTE: &[&str] = &["amixer", "set", "Master", "toggle"];

    /// Disable screen blanking and power management at startup
    pub const DISABLE_BLANKING: &str = "xset s off && xset -dpms && xset s noblank";

    /// Clipboard manager launched at startup
    pub const CLIPBOARD_MANAGER: &[&str] = &["xfce4-clipman"];

    /// Wallpaper setter; the wallpaper path is appended at hook-run time
    pub const WALLPAPER_SETTER: &[&str] = &["feh", "--bg-scale"];

    /// Wallpaper file looked up under the home directory
    pub const WALLPAPER_FILE: &str = "wallp.png";

    /// Display reconfiguration, delayed until outputs settle
    pub const DISPLAY_RECONFIGURE: &str =
        "sleep 2 && xrandr --output HDMI-0 --mode 1920x1080 --rate 180";
}

/// Mouse button numbers (X11 core button numbering)
pub mod mouse {
    /// Left mouse button
    pub const BUTTON_LEFT: u8 = 1;
    /// Middle mouse button
    pub const BUTTON_MIDDLE: u8 = 2;
    /// Right mouse button
    pub const BUTTON_RIGHT: u8 = 3;
    /// Scroll wheel up
    pub const BUTTON_SCROLL_UP: u8 = 4;
    /// Scroll wheel down
    pub const BUTTON_SCROLL_DOWN: u8 = 5;
}

/// Configuration paths and filenames
pub mod config {
    /// Application directory name under XDG config
    pub const APP_DIR: &str = "gridwm";

    /// Configuration filename
    pub const FILENAME: &str = "config.json";
}

/// Default behavior options
pub mod defaults {
    /// Workspace group names, in display order
    pub const GROUP_NAMES: &str = "123456789";

    /// Name the host reports as its WM_NAME
    pub const WM_NAME: &str = "gridwm";

    /// Cursor size in pixels
    pub const XCURSOR_SIZE: u16 = 24;
}
