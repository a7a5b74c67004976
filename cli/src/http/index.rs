//! 帮助页：列出参数与推荐格式的示例链接

use parzu_core::api::SUGGESTED_FORMATS;

const EXAMPLE_TEXT: &str = "Ich%20bin%20ein%20Berliner.";

pub fn index_html() -> String {
    let links: String = SUGGESTED_FORMATS
        .iter()
        .map(|format| {
            format!(
                "      <li><a href=\"/parse/?text={EXAMPLE_TEXT}&format={format}\">{format}</a></li>\n"
            )
        })
        .collect();

    format!(
        r#"<!doctype html>
<html lang="en">
<title>ParZu API</title>
<body>
Simple web API for ParZu, supporting both GET and POST requests.
<br/>
<br/>
Arguments:
<ul>
  <li>text: the raw text that you want to parse</li>
  <li>format: the desired output format (default: conll). Suggested choices:
  <ul>
{links}  </ul>
  </li>
</ul>
POST requests carry a JSON body, e.g. <code>{{"text": "Ich bin ein Berliner.", "format": "conll"}}</code>.
<br/>
For more information, see <a href="http://github.com/rsennrich/ParZu">http://github.com/rsennrich/ParZu</a>.
</body></html>
"#
    )
}
