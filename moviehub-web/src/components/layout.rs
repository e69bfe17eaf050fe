//! Layout components - header, search box, spinner

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the hero banner with the search box underneath.
pub fn hero_header(query: &str) -> String {
    format!(
        r#"<header class="text-center pt-10 pb-6">
            <h1 class="text-4xl sm:text-5xl font-bold text-white max-w-3xl mx-auto leading-tight">
                Find <span class="text-gradient">Movies</span> You'll Enjoy Without the Hassle
            </h1>
            {}
        </header>"#,
        search_box(query)
    )
}

/// Renders the search input.
///
/// Every keystroke is posted to `/htmx/query`; nothing is swapped in
/// response since the controller debounces and the sections poll.
pub fn search_box(query: &str) -> String {
    let value = escape_html(query);

    format!(
        r#"<div class="search mt-8 max-w-3xl mx-auto">
            <div class="flex items-center bg-gray-800 rounded-lg px-4 py-3">
                <span class="text-gray-400 mr-3" aria-hidden="true">&#128269;</span>
                <input type="text" name="query" value="{value}"
                       placeholder="Search through thousands of movies"
                       autocomplete="off"
                       class="w-full bg-transparent text-white placeholder-gray-500 focus:outline-none"
                       hx-post="/htmx/query" hx-trigger="input changed" hx-swap="none" />
            </div>
        </div>"#
    )
}

/// Renders the loading spinner.
pub fn spinner() -> String {
    r#"<div role="status" class="flex justify-center py-8">
            <div class="w-8 h-8 border-4 border-gray-600 border-t-indigo-400 rounded-full animate-spin"></div>
            <span class="sr-only">Loading...</span>
        </div>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script> & 'co'"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; &#39;co&#39;"
        );
        assert_eq!(escape_html("amélie"), "amélie");
    }

    #[test]
    fn test_search_box_escapes_current_query() {
        let html = search_box(r#"" onfocus="alert(1)"#);
        assert!(html.contains(r#"value="&quot; onfocus=&quot;alert(1)""#));
        assert!(!html.contains(r#"onfocus="alert"#));
    }
}
