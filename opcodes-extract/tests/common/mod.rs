/// A table row shaped like the rendered binary-format tables: each cell wraps
/// its math in `<p><span class="math">`.
pub fn row(name_tex: &str, bytes_tex: &str) -> String {
    format!(
        "<tr><td><p><span class=\"math notranslate nohighlight\">\\({name_tex}\\)</span></p></td>\
         <td><p><span class=\"math notranslate nohighlight\">\\({bytes_tex}\\)</span></p></td></tr>"
    )
}

pub fn page(rows: &[String]) -> String {
    format!(
        "<!DOCTYPE html><html><body><table class=\"docutils\"><tbody>{}</tbody></table></body></html>",
        rows.concat()
    )
}
