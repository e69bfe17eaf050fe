//! Base HTML template with HTMX, Tailwind and common styles

/// Wraps page content in the document shell.
pub fn base_template(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <title>{title}</title>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <script src="https://cdn.tailwindcss.com"></script>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <style>
        body {{ background: #030014; font-family: 'DM Sans', -apple-system, BlinkMacSystemFont, sans-serif; }}
        .pattern {{ background-image: radial-gradient(#1e1b4b 1px, transparent 1px); background-size: 24px 24px;
                    position: fixed; inset: 0; z-index: 0; opacity: 0.6; }}
        .wrapper {{ position: relative; z-index: 1; max-width: 80rem; margin: 0 auto; padding: 1.25rem 2.5rem 3rem; }}
        .text-gradient {{ background: linear-gradient(90deg, #d6c7ff 0%, #ab8bff 100%);
                          -webkit-background-clip: text; background-clip: text; color: transparent; }}
        .fancy-text {{ -webkit-text-stroke: 4px rgba(206, 206, 251, 0.5); color: #030014; }}
        .trending ul::-webkit-scrollbar {{ display: none; }}
    </style>
</head>
<body>
    <main>
        <div class="pattern"></div>
        <div class="wrapper">
            {content}
        </div>
    </main>
</body>
</html>"#
    )
}
