use plotters::prelude::*;

pub static FONT_SIZE: i32 = 20;
pub static STROKE_WIDTH: u32 = 3;

pub fn get_color_from_label(label: &str) -> RGBColor {
    match label {
        "dark-red" | "resmgm" => RGBColor(130, 1, 1),
        "dark-blue" | "distrm" => RGBColor(1, 6, 130),
        "dark-green" => RGBColor(0, 97, 29),
        _ => panic!("rmplot: unrecognised colour label: {label}"),
    }
}
