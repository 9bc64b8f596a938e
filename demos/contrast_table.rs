use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use brand_contrast::{RGBColor, ContrastResult, report::{WHITE, BLACK}};

type Err = Box<dyn Error>;

fn cell(fh: &mut impl Write, fg: RGB8, res: &ContrastResult)
        -> Result<(), Err> {
    writeln!(fh, "  <td style=\"width: 150px; height: 40px; \
                  color: {}; background-color: {}\">\
                  {:.2}:1 {}</td>",
             fg.to_hex(), res.background.to_hex(), res.ratio, res.level())?;
    Ok(())
}

fn row(fh: &mut impl Write, name: &str, hex: &str) -> Result<(), Err> {
    let c = RGB8::from_hex(hex)?;
    let report = c.report();
    let hsl = report.hsl;
    writeln!(fh, "<tr><td>{name}</td>\
                  <td style=\"background-color: {}; color: {}\">{}</td>\
                  <td>hsl({}, {}%, {}%)</td>",
             c.to_hex(), c.readable_text().to_hex(), c.to_hex(),
             hsl.hue, hsl.saturation, hsl.lightness)?;
    cell(fh, c, &report.on_white)?;
    cell(fh, c, &report.on_black)?;
    for amount in [20, 40] {
        let shade = c.darken(amount);
        cell(fh, shade, &shade.contrast(&WHITE))?;
    }
    writeln!(fh, "</tr>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("contrast.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>brand_contrast: {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;
    writeln!(fh, "<h3>Brand colors</h3>\n\
                  <table style=\"border-spacing: 4px\">\n\
                  <tr><th>Role</th><th>Color</th><th>HSL</th>\
                  <th>On {}</th><th>On {}</th>\
                  <th>Darkened 20</th><th>Darkened 40</th></tr>",
             WHITE.to_hex(), BLACK.to_hex())?;
    for (name, hex) in [("primary", "#1A365D"), ("secondary", "#2B6CB0"),
                        ("accent", "#F6E05E"), ("success", "#38A169"),
                        ("warning", "#DD6B20"), ("danger", "#E53E3E"),
                        ("neutral", "#718096"), ("surface", "#F7FAFC")] {
        row(&mut fh, name, hex)?;
    }
    writeln!(fh, "</table>\n\
                  </body>\n\
                  </html>")?;
    Ok(())
}
