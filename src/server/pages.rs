//! HTML pages.

use crate::models::ArtPiece;

/// The search page.
pub const INDEX_HTML: &str = include_str!("../../ui/index.html");

/// Escape text for use in HTML content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the result page for a finished pipeline run.
pub fn render_result(piece: &ArtPiece) -> String {
    let song = &piece.song;

    let artwork = match piece.artwork.image_url() {
        Some(url) => format!(
            r#"<img id="artwork" src="{}" alt="Artwork for {}">"#,
            escape_html(url),
            escape_html(&song.title)
        ),
        None => {
            r#"<p class="no-artwork">The artwork could not be generated this time.</p>"#.to_string()
        }
    };

    let source_link = match &song.url {
        Some(url) => format!(
            r#"<p><a href="{}">Lyrics on Genius</a></p>"#,
            escape_html(url)
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - lyricart</title>
    <style>
        body {{
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background: #1a1a1a;
            color: #e0e0e0;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
        }}
        h1 {{ color: #4a9eff; margin-bottom: 5px; }}
        .meta {{ color: #888; }}
        #artwork {{ width: 100%; max-width: 768px; border-radius: 6px; }}
        .analysis {{ white-space: pre-wrap; background: #2a2a2a; padding: 16px; border-radius: 6px; }}
        a {{ color: #4a9eff; }}
    </style>
</head>
<body>
    <h1>{title}</h1>
    <div class="meta">
        <p>Artist: {artist}</p>
        <p>Album: {album}</p>
        <p>Release Date: {release_date}</p>
    </div>
    {artwork}
    <h2>Analysis</h2>
    <div class="analysis">{analysis}</div>
    {source_link}
    <p><a href="/">Search another song</a></p>
</body>
</html>
"#,
        title = escape_html(&song.title),
        artist = escape_html(&song.artist),
        album = escape_html(song.album_or_unknown()),
        release_date = escape_html(song.release_date_or_unknown()),
        artwork = artwork,
        analysis = escape_html(&piece.analysis),
        source_link = source_link,
    )
}
