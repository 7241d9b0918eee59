use gpui::{px, rgb, App};
use gpui_component::theme::{self, Theme, ThemeColor, ThemeMode};

pub fn install(cx: &mut App) {
    theme::init(cx);

    // Start from gpui's default dark palette so every token has a sane value,
    // then override the hues for the booth's warm studio look.
    let mut colors = *ThemeColor::dark();
    // Core palette
    colors.background = rgb(0x17121a).into();
    colors.foreground = rgb(0xf7f4fb).into();
    colors.primary = rgb(0xE84393).into();
    colors.primary_hover = rgb(0xFD5AA8).into();
    colors.primary_active = rgb(0xC92F7B).into();
    colors.primary_foreground = rgb(0xffffff).into();
    // Accents and surfaces
    colors.accent = rgb(0xf4b84c).into();
    colors.accent_foreground = rgb(0x1c1309).into();
    colors.border = rgb(0x2a2330).into();
    // Cards / panels
    colors.group_box = rgb(0x201a26).into();
    colors.group_box_foreground = colors.foreground;
    colors.muted = rgb(0x1c171f).into();
    colors.muted_foreground = rgb(0xbfb3cd).into();
    colors.list = rgb(0x201a26).into();
    colors.list_even = rgb(0x261f2d).into();
    colors.list_hover = rgb(0x2c2434).into();
    colors.list_active = rgb(0x352a40).into();
    colors.list_active_border = colors.primary;
    colors.slider_bar = rgb(0x2c2434).into();
    colors.slider_thumb = colors.primary;
    // Tabs (step chips)
    colors.tab = rgb(0x1c171f).into();
    colors.tab_active = rgb(0x2b2133).into();
    colors.tab_active_foreground = colors.foreground;
    colors.tab_foreground = rgb(0xc4bad1).into();
    colors.tab_bar = rgb(0x120d15).into();
    // Selection and sidebar
    colors.selection = colors.primary;
    colors.sidebar = rgb(0x120d15).into();
    colors.sidebar_foreground = colors.foreground;
    colors.sidebar_border = colors.border;
    colors.switch = rgb(0x2c2434).into();
    // Status tokens
    colors.warning = rgb(0xf6c343).into();
    colors.warning_foreground = rgb(0x281d08).into();
    colors.danger = rgb(0xf05d70).into();
    colors.danger_foreground = rgb(0x300006).into();
    colors.success = rgb(0x3fd68f).into();
    colors.success_foreground = rgb(0x04170d).into();
    colors.info = rgb(0x4c9ef4).into();
    colors.info_foreground = rgb(0x041321).into();

    let mut theme = Theme::from(&colors);
    theme.mode = ThemeMode::Dark;
    theme.font_size = px(15.0);

    if cx.has_global::<Theme>() {
        *Theme::global_mut(cx) = theme;
    } else {
        cx.set_global(theme);
    }
}
