//! Debug/profiling page rendering.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;
use profont::PROFONT_12_POINT;
use watchface_common::colors::{BLACK, DARK_GREY, LIGHT_GREY, MEDIUM_AQUAMARINE, MELON, SPRING_GREEN, WHITE};
use watchface_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use watchface_common::debug_log::DebugLog;
use watchface_common::{FaceVariant, WatchFace};

use crate::profiling::ProfilingMetrics;

const HEADER_Y: i32 = 14;
const HEADER_DIVIDER_Y: i32 = 19;
const SECTION_HEADER_Y: i32 = 30;
const STATS_Y: i32 = 41;
const STAT_LINE_HEIGHT: i32 = 10;
const LOG_DIVIDER_Y: i32 = 104;
const LOG_Y: i32 = 113;
const LOG_LINE_HEIGHT: i32 = 9;
const LOG_LINES: usize = 6;
const COL1_X: i32 = 4;
const COL2_X: i32 = 94;

const DEBUG_BG: Rgb565 = BLACK;
const HEADER_COLOR: Rgb565 = SPRING_GREEN;
const SECTION_COLOR: Rgb565 = LIGHT_GREY;
const VALUE_COLOR: Rgb565 = WHITE;
const HIGHLIGHT_COLOR: Rgb565 = MEDIUM_AQUAMARINE;
const LOG_PROMPT_COLOR: Rgb565 = SPRING_GREEN;
const LOG_TEXT_COLOR: Rgb565 = MELON;
const DIVIDER_COLOR: Rgb565 = DARK_GREY;

const HEADER_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_12_POINT, HEADER_COLOR);
const SECTION_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_5X8, SECTION_COLOR);
const VALUE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_5X8, VALUE_COLOR);
const HIGHLIGHT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_5X8, HIGHLIGHT_COLOR);

pub fn draw_debug_page<D>(
    display: &mut D,
    face: &WatchFace,
    metrics: &ProfilingMetrics,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(DEBUG_BG).ok();
    draw_header(display, metrics);
    draw_horizontal_line(display, HEADER_DIVIDER_Y);
    draw_face_column(display, face);
    draw_timing_column(display, metrics);
    draw_horizontal_line(display, LOG_DIVIDER_Y);
    draw_log_terminal(display, face.log());
}

fn draw_header<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    metrics: &ProfilingMetrics,
) {
    Text::new("DEBUG", Point::new(COL1_X, HEADER_Y), HEADER_STYLE)
        .draw(display)
        .ok();

    let mut uptime: String<16> = String::new();
    let _ = write!(uptime, "UP {}", metrics.uptime_string());
    Text::new(&uptime, Point::new(COL2_X, HEADER_Y - 2), VALUE_STYLE)
        .draw(display)
        .ok();
}

fn draw_face_column<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    face: &WatchFace,
) {
    Text::new("FACE", Point::new(COL1_X, SECTION_HEADER_Y), SECTION_STYLE)
        .draw(display)
        .ok();

    let settings = face.settings();
    let theme = settings.theme().map_or("?", |t| t.label());
    let time = face.time();
    let on_off = |on: bool| if on { "on" } else { "off" };

    let mut lines: [String<20>; 6] = Default::default();
    let _ = write!(lines[0], "{}", face.variant().label());
    let _ = write!(lines[1], "Time:  {}:{:02}", time.hours, time.minutes);
    let _ = write!(lines[2], "Theme: {} {theme}", settings.color_theme);
    if face.variant() == FaceVariant::Layered {
        let _ = write!(lines[3], "Inv:   {}", on_off(settings.inverted));
        let _ = write!(lines[4], "Vibe:  {}", on_off(settings.vibrate_on_disconnect));
        let _ = write!(lines[5], "Phone: {}", on_off(face.is_connected()));
    } else {
        let _ = write!(lines[3], "Radius:{}", face.radius());
        let _ = write!(lines[4], "Anim:  {}", on_off(face.is_animating()));
    }

    let mut y = STATS_Y;
    for (i, line) in lines.iter().enumerate() {
        let style = if i == 0 { HIGHLIGHT_STYLE } else { VALUE_STYLE };
        Text::new(line, Point::new(COL1_X, y), style).draw(display).ok();
        y += STAT_LINE_HEIGHT;
    }
}

fn draw_timing_column<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    metrics: &ProfilingMetrics,
) {
    Text::new("RENDER", Point::new(COL2_X, SECTION_HEADER_Y), SECTION_STYLE)
        .draw(display)
        .ok();

    let x = COL2_X;
    let mut y = STATS_Y;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Frames: {}", metrics.total_frames);
    Text::new(&s, Point::new(x, y), VALUE_STYLE).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Drawn:  {}/{}", metrics.face_redraws, metrics.idle_frames);
    Text::new(&s, Point::new(x, y), VALUE_STYLE).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Render: {:.2}ms", metrics.render_time_us as f32 / 1000.0);
    Text::new(&s, Point::new(x, y), HIGHLIGHT_STYLE).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Min:    {:.1}ms", metrics.frame_time_min_us() as f32 / 1000.0);
    Text::new(&s, Point::new(x, y), HIGHLIGHT_STYLE).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let max_ms = metrics.frame_time_max_us as f32 / 1000.0;
    let mut s: String<20> = String::new();
    let _ = write!(s, "Max:    {max_ms:.1}ms");
    Text::new(&s, Point::new(x, y), HIGHLIGHT_STYLE).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Avg:    {:.1}ms", metrics.frame_time_avg_us() as f32 / 1000.0);
    Text::new(&s, Point::new(x, y), HIGHLIGHT_STYLE).draw(display).ok();
}

fn draw_log_terminal<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    log: &DebugLog,
) {
    let prompt_style = MonoTextStyle::new(&FONT_5X8, LOG_PROMPT_COLOR);
    let text_style = MonoTextStyle::new(&FONT_5X8, LOG_TEXT_COLOR);

    Rectangle::new(
        Point::new(0, LOG_DIVIDER_Y + 2),
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - LOG_DIVIDER_Y as u32 - 2),
    )
    .into_styled(PrimitiveStyle::with_fill(Rgb565::new(1, 2, 1)))
    .draw(display)
    .ok();

    let mut y = LOG_Y;

    for line in log.latest(LOG_LINES) {
        Text::new(">", Point::new(COL1_X, y), prompt_style).draw(display).ok();
        Text::new(line, Point::new(COL1_X + 8, y), text_style)
            .draw(display)
            .ok();
        y += LOG_LINE_HEIGHT;
    }

    Text::new("> _", Point::new(COL1_X, y), prompt_style).draw(display).ok();
}

fn draw_horizontal_line<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    y: i32,
) {
    Line::new(Point::new(2, y), Point::new(SCREEN_WIDTH as i32 - 3, y))
        .into_styled(PrimitiveStyle::with_stroke(DIVIDER_COLOR, 1))
        .draw(display)
        .ok();
}
