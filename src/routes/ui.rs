use crate::AppState;
use crate::render::{escape, render_slide};
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};
use std::fmt::Write;
use std::sync::Arc;

const THEME: &str = r#"
        :root {
            --color-bg: #121212;
            --color-surface: #181818;
            --color-text: #ffffff;
            --color-muted: #b3b3b3;
            --color-primary: #1db954;
            --color-accent-purple: #9b5de5;
            --color-accent-pink: #f15bb5;
            --color-accent-blue: #00bbf9;
            --color-accent-teal: #00f5d4;
            --color-accent-orange: #ff9f1c;
        }

        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
            background: var(--color-bg);
            color: var(--color-text);
            min-height: 100vh;
        }
"#;

pub async fn serve_home_page(State(state): State<Arc<AppState>>) -> Response {
    let status = state.status_client.check().await;

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Wrapped</title>
    <style>{theme}
        main {{
            display: flex;
            justify-content: center;
            align-items: center;
            min-height: 100vh;
            padding: 20px;
        }}

        .container {{
            background: var(--color-surface);
            border-radius: 12px;
            padding: 40px;
            max-width: 480px;
            width: 100%;
        }}

        .description {{
            color: var(--color-muted);
            margin: 10px 0 30px;
        }}

        .status h2 {{
            font-size: 16px;
            margin-bottom: 8px;
        }}

        .links {{
            margin-top: 30px;
            display: flex;
            gap: 20px;
        }}

        .links a {{
            color: var(--color-primary);
            text-decoration: none;
        }}
    </style>
</head>
<body>
    <main>
        <div class="container">
            <h1>Welcome to Wrapped</h1>
            <p class="description">axum + tokio</p>
            <div class="status">
                <h2>API Status:</h2>
                <p id="api-status">{status}</p>
            </div>
            <div class="links">
                <a href="/api/hello">API Route Example &rarr;</a>
                <a href="/wrapped">Your Wrapped &rarr;</a>
            </div>
        </div>
    </main>
</body>
</html>"#,
        theme = THEME,
        status = escape(status.message()),
    );

    Html(html).into_response()
}

pub async fn serve_presentation_page(State(state): State<Arc<AppState>>) -> Response {
    let mut slides = String::new();
    let mut indicators = String::new();
    for (index, slide) in state.slides.iter().enumerate() {
        let rendered = render_slide(slide);
        let active = if index == 0 { " active" } else { "" };
        let _ = write!(
            slides,
            r#"<div class="slide{}" data-index="{}" data-kind="{}">{}</div>"#,
            active, index, rendered.kind, rendered.html
        );
        let _ = write!(
            indicators,
            r#"<button class="indicator{}" data-index="{}" aria-label="Go to slide {}"></button>"#,
            active,
            index,
            index + 1
        );
    }

    let (play_icon, play_title) = if state.config.presentation.auto_play {
        ("&#9208;", "Pause")
    } else {
        ("&#9654;", "Play")
    };

    let mut html = String::new();
    html.push_str(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Wrapped Slides</title>
    <style>"#,
    );
    html.push_str(THEME);
    html.push_str(PRESENTATION_STYLE);
    html.push_str("    </style>\n</head>\n<body>\n");
    let _ = write!(
        html,
        r#"<div class="presentation">
    <div class="slides-container">{slides}</div>
    <div class="controls">
        <button class="nav-button" id="prev" aria-label="Previous slide">&larr;</button>
        <div class="indicators">{indicators}</div>
        <button class="nav-button" id="next" aria-label="Next slide">&rarr;</button>
    </div>
    <div class="slide-counter"><span id="counter">1 / {total}</span></div>
    <button class="autoplay-button" id="autoplay" title="{play_title}">{play_icon}</button>
</div>
"#,
        slides = slides,
        indicators = indicators,
        total = state.slides.len(),
        play_icon = play_icon,
        play_title = play_title,
    );
    html.push_str(PRESENTATION_SCRIPT);
    html.push_str("</body>\n</html>");

    Html(html).into_response()
}

const PRESENTATION_STYLE: &str = r#"
        .presentation {
            position: relative;
            width: 100vw;
            height: 100vh;
            overflow: hidden;
        }

        .slide {
            position: absolute;
            inset: 0;
            opacity: 0;
            pointer-events: none;
            transition: opacity 0.6s ease;
        }

        .slide.active {
            opacity: 1;
            pointer-events: auto;
        }

        .slide-container {
            display: flex;
            flex-direction: column;
            justify-content: center;
            align-items: center;
            height: 100%;
            padding: 60px 40px 120px;
            text-align: center;
            gap: 24px;
        }

        .highlight {
            color: var(--color-primary);
        }

        .badge-text {
            border: 2px solid var(--color-primary);
            border-radius: 999px;
            padding: 4px 16px;
        }

        .tagline, .subtitle, .footer-text, .share-text, .quote-author {
            color: var(--color-muted);
        }

        .stats-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 16px;
            width: 100%;
            max-width: 900px;
        }

        .stat-card, .prompt-item, .quote-card {
            background: var(--color-surface);
            border-radius: 12px;
            padding: 20px;
        }

        .stat-card {
            border-top: 4px solid var(--accent-color);
        }

        .stat-value {
            font-size: 32px;
            font-weight: 700;
            color: var(--accent-color);
        }

        .unit {
            font-size: 16px;
            margin-left: 4px;
        }

        .prompts-list, .quotes-carousel {
            display: flex;
            flex-direction: column;
            gap: 16px;
            max-width: 720px;
            width: 100%;
        }

        .prompt-item {
            display: flex;
            gap: 16px;
            text-align: left;
            border-left: 4px solid var(--prompt-color);
        }

        .prompt-number {
            font-size: 28px;
            font-weight: 700;
            color: var(--prompt-color);
        }

        .quote-card {
            background: linear-gradient(var(--gradient-seed), rgba(29, 185, 84, 0.25), rgba(155, 93, 229, 0.25));
        }

        .quote-text {
            font-size: 20px;
            font-style: italic;
        }

        .share-buttons {
            display: flex;
            gap: 12px;
            justify-content: center;
            margin-top: 12px;
        }

        button {
            font: inherit;
            color: var(--color-text);
            background: var(--color-surface);
            border: 1px solid var(--color-muted);
            border-radius: 999px;
            padding: 8px 16px;
            cursor: pointer;
        }

        .controls {
            position: absolute;
            bottom: 32px;
            left: 50%;
            transform: translateX(-50%);
            display: flex;
            align-items: center;
            gap: 16px;
        }

        .indicators {
            display: flex;
            gap: 8px;
        }

        .indicator {
            width: 10px;
            height: 10px;
            padding: 0;
        }

        .indicator.active {
            background: var(--color-primary);
            border-color: var(--color-primary);
        }

        .slide-counter {
            position: absolute;
            top: 24px;
            right: 32px;
            color: var(--color-muted);
        }

        .autoplay-button {
            position: absolute;
            top: 16px;
            left: 24px;
        }
"#;

const PRESENTATION_SCRIPT: &str = r#"<script>
    const slides = document.querySelectorAll('.slide');
    const indicators = document.querySelectorAll('.indicator');
    const counter = document.getElementById('counter');
    const autoplay = document.getElementById('autoplay');

    const scheme = window.location.protocol === 'https:' ? 'wss:' : 'ws:';
    const socket = new WebSocket(`${scheme}//${window.location.host}/wrapped/ws`);

    function send(command) {
        if (socket.readyState === WebSocket.OPEN) {
            socket.send(JSON.stringify(command));
        }
    }

    function applyFrame(frame) {
        slides.forEach((slide, index) => {
            slide.classList.toggle('active', index === frame.index);
        });
        indicators.forEach((indicator, index) => {
            indicator.classList.toggle('active', index === frame.index);
        });
        counter.textContent = `${frame.index + 1} / ${frame.total}`;
        autoplay.textContent = frame.isAutoPlaying ? '⏸' : '▶';
        autoplay.title = frame.isAutoPlaying ? 'Pause' : 'Play';
    }

    socket.addEventListener('message', (event) => {
        const message = JSON.parse(event.data);
        if (message.error) {
            console.error('Presentation error:', message.error);
            return;
        }
        applyFrame(message);
    });

    window.addEventListener('keydown', (e) => {
        if (e.key === ' ') {
            e.preventDefault();
        }
        if (e.key === 'ArrowRight' || e.key === 'ArrowLeft' || e.key === ' ') {
            send({ action: 'key', key: e.key });
        }
    });

    document.getElementById('prev').addEventListener('click', () => send({ action: 'previous' }));
    document.getElementById('next').addEventListener('click', () => send({ action: 'next' }));
    autoplay.addEventListener('click', () => send({ action: 'toggleAutoPlay' }));
    indicators.forEach((indicator) => {
        indicator.addEventListener('click', () => {
            send({ action: 'goTo', index: Number(indicator.dataset.index) });
        });
    });
</script>
"#;
