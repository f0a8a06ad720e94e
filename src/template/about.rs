use super::{Patcher, Rendered, escape_html, escape_with_breaks, fragment, present};
use crate::types::about::{AboutContent, Slide};
use crate::types::homepage::TeamMember;

fragment!(
    HERO_SUBTITLE,
    r#"<p class="text-size-regular text-color-white">Empowering Brand Excellence</p>"#
);
fragment!(
    HERO_DESCRIPTION,
    r#"<p class="text-size-regular text-color-white">We are a premier brand management company[\s\S]*?multiple industries\.</p>"#
);
fragment!(
    HERO_IMAGE,
    r#"<div class="about-hero-image">[\s\S]*?<img[\s\S]*?src="[^"]*"[\s\S]*?class="image-fill"[\s\S]*?/>"#
);
fragment!(STORY_HEADING, r#"<h3 class="heading-style-h3">Our Story</h3>"#);
fragment!(
    INTRO_TITLE,
    r#"<h2 class="heading-style-h1 text-align-center">Discover Our Brand Portfolio Excellence</h2>"#
);
fragment!(
    STORY_TITLE,
    r#"<p class="text-size-tiny text-style-allcaps text-color-red text-weight-medium">Our<br/>Mission</p>"#
);
fragment!(
    STORY_BODY,
    r#"<p class="text-size-regular">At Ventured Brands, we specialize in acquiring[\s\S]*?new heights of success\.</p>"#
);
fragment!(
    STORY_STRIP,
    r#"<div id="w-node-_0954c621-66b7-be0f-b1ac-7ad6ac03614c-2c360d96" class="about-story-strip">[\s\S]*?</div>\s*</div>"#
);
fragment!(
    QUOTE_TEXT,
    r#"<h1 class="text-size-xl text-align-center">"We transform brands into market leaders through strategic excellence"</h1>"#
);
fragment!(
    QUOTE_AUTHOR,
    r#"<p class="text-size-small text-style-allcaps text-weight-normal">Sarah Mitchell</p><img src="images/bold-star-light\.svg" loading="lazy" alt="" class="quote-star"/><p class="text-size-small text-style-allcaps text-weight-normal">CEO, Ventured Brands</p>"#
);
fragment!(
    TEAM_TITLE,
    r#"<h2 class="heading-style-h1">Our Expert<br/>Leadership Team</h2>"#
);
fragment!(
    TEAM_DESCRIPTION,
    r#"<p class="text-size-regular text-color-white">Our leadership team brings decades of experience in brand management, strategic growth, and market expansion\.</p>"#
);
fragment!(
    TEAM_LIST,
    r#"(<div id="w-node-acc32622-cc3f-1753-2c8a-f316a66e3e75-2c360d96" class="about-team-list">)[\s\S]*?</div>(\s*</div>\s*</div>\s*</div>\s*</div>\s*</div>)"#
);
fragment!(
    GALLERY,
    r#"<div data-delay="5" data-animation="slide" class="about-slider w-slider"[\s\S]*?</div>\s*</div>\s*</div>"#
);

const DEFAULT_STORY_IMAGE1: &str = "https://cdn.prod.website-files.com/63f01df7eead46b8df360d90/63f01df7eead469ed8360ed7_Person%20006.webp";
const DEFAULT_STORY_IMAGE2: &str = "images/person-004.webp";

/// Merge about-page content into the `about.html` template.
pub fn render_about(template: &str, content: &AboutContent) -> Rendered {
    let mut p = Patcher::new(template);

    if let Some(hero) = &content.hero {
        if let Some(v) = present(&hero.subtitle) {
            p.once(
                "hero.subtitle",
                &HERO_SUBTITLE,
                &format!(
                    r#"<p class="text-size-regular text-color-white">{}</p>"#,
                    escape_html(v)
                ),
            );
        }
        if let Some(v) = present(&hero.description) {
            p.once(
                "hero.description",
                &HERO_DESCRIPTION,
                &format!(
                    r#"<p class="text-size-regular text-color-white">{}</p>"#,
                    escape_html(v)
                ),
            );
        }
        if let Some(v) = present(&hero.image) {
            p.once(
                "hero.image",
                &HERO_IMAGE,
                &format!(
                    r#"<div class="about-hero-image">
  <div class="about-image-height"></div>
  <div class="image-overlay"></div>
  <img src="{}" loading="lazy" alt="Hero image" class="image-fill" />"#,
                    escape_html(v)
                ),
            );
        }
        if let Some(v) = present(&hero.story_title) {
            p.once(
                "hero.storyTitle",
                &STORY_HEADING,
                &format!(r#"<h3 class="heading-style-h3">{}</h3>"#, escape_html(v)),
            );
        }
    }

    if let Some(v) = content.story_intro.as_ref().and_then(|s| present(&s.title)) {
        p.once(
            "storyIntro.title",
            &INTRO_TITLE,
            &format!(
                r#"<h2 class="heading-style-h1 text-align-center">{}</h2>"#,
                escape_html(v)
            ),
        );
    }

    if let Some(story) = &content.story {
        if let Some(v) = present(&story.title) {
            p.once(
                "story.title",
                &STORY_TITLE,
                &format!(
                    r#"<p class="text-size-tiny text-style-allcaps text-color-red text-weight-medium">{}</p>"#,
                    escape_with_breaks(v)
                ),
            );
        }
        let body: Vec<String> = [present(&story.description), present(&story.content)]
            .into_iter()
            .flatten()
            .map(escape_html)
            .collect();
        if !body.is_empty() {
            p.once(
                "story.content",
                &STORY_BODY,
                &format!(r#"<p class="text-size-regular">{}</p>"#, body.join("<br/><br/>")),
            );
        }
        let image1 = present(&story.image1);
        let image2 = present(&story.image2);
        if image1.is_some() || image2.is_some() {
            p.once(
                "story.images",
                &STORY_STRIP,
                &render_story_strip(
                    image1.unwrap_or(DEFAULT_STORY_IMAGE1),
                    image2.unwrap_or(DEFAULT_STORY_IMAGE2),
                ),
            );
        }
    }

    if let Some(quote) = &content.quote {
        if let Some(v) = present(&quote.text) {
            p.once(
                "quote.text",
                &QUOTE_TEXT,
                &format!(
                    r#"<h1 class="text-size-xl text-align-center">"{}"</h1>"#,
                    escape_html(v)
                ),
            );
        }
        if let Some(v) = present(&quote.author) {
            p.once(
                "quote.author",
                &QUOTE_AUTHOR,
                &format!(
                    r#"<p class="text-size-small text-style-allcaps text-weight-normal">{}</p><img src="images/bold-star-light.svg" loading="lazy" alt="" class="quote-star"/><p class="text-size-small text-style-allcaps text-weight-normal">Ventured Brands</p>"#,
                    escape_html(v)
                ),
            );
        }
    }

    if let Some(team) = &content.team {
        if let Some(v) = present(&team.title) {
            p.once(
                "team.title",
                &TEAM_TITLE,
                &format!(r#"<h2 class="heading-style-h1">{}</h2>"#, escape_with_breaks(v)),
            );
        }
        if let Some(v) = present(&team.description) {
            p.once(
                "team.description",
                &TEAM_DESCRIPTION,
                &format!(
                    r#"<p class="text-size-regular text-color-white">{}</p>"#,
                    escape_html(v)
                ),
            );
        }
        if let Some(members) = team.team_members.as_deref().filter(|m| !m.is_empty()) {
            let cards = render_team_cards(members);
            p.with("team.teamMembers", &TEAM_LIST, |caps| {
                format!("{}{cards}\n</div>{}", &caps[1], &caps[2])
            });
        }
    }

    if let Some(slides) = content
        .gallery
        .as_ref()
        .and_then(|g| g.slides.as_deref())
        .filter(|s| !s.is_empty())
    {
        p.once("gallery.slides", &GALLERY, &render_gallery(slides));
    }

    p.finish()
}

fn render_story_strip(image1: &str, image2: &str) -> String {
    format!(
        r#"<div id="w-node-_0954c621-66b7-be0f-b1ac-7ad6ac03614c-2c360d96" class="about-story-strip">
  <div class="about-story-image">
    <div class="about-story-height"></div>
    <div class="image-overlay"></div>
    <img src="{}" loading="lazy" alt="Story image 1" class="image-fill" />
  </div>
  <div class="about-story-image">
    <div class="about-story-height"></div>
    <div class="image-overlay"></div>
    <img src="{}" loading="lazy" alt="Story image 2" class="image-fill" />
  </div>
</div>"#,
        escape_html(image1),
        escape_html(image2)
    )
}

fn render_team_cards(members: &[TeamMember]) -> String {
    members
        .iter()
        .map(|m| {
            format!(
                r#"
<div class="about-team-card">
  <div class="about-team-image">
    <div class="about-team-height"></div>
    <div class="image-overlay"></div>
    <img src="{}" loading="lazy" alt="{}" class="image-fill" />
  </div>
  <div class="home-team-name">
    <h3 class="heading-style-h3">{}</h3>
    <div class="home-team-credit">
      <p class="text-size-xsmall text-style-allcaps text-color-white text-weight-medium">{}</p>
    </div>
  </div>
</div>"#,
                escape_html(&m.image),
                escape_html(&m.alt),
                escape_html(&m.name),
                escape_html(&m.title)
            )
        })
        .collect()
}

/// The second slide starts active, as in the static markup; a single slide
/// is its own active slide.
fn render_gallery(slides: &[Slide]) -> String {
    let total = slides.len();
    let active = if total > 1 { 1 } else { 0 };

    let items: String = slides
        .iter()
        .enumerate()
        .map(|(i, slide)| {
            let hidden = if i == active { "" } else { r#" aria-hidden="true""# };
            format!(
                r#"
    <div class="about-image-slide w-slide" aria-label="{n} of {total}" role="group"{hidden}>
      <div class="about-slider-image"{hidden}>
        <div class="about-slider-height"{hidden}></div>
        <div class="image-overlay"{hidden}></div>
        <img src="{src}" loading="lazy" sizes="(max-width: 479px) 89vw, (max-width: 767px) 93vw, (max-width: 991px) 89vw, 48vw" alt="{alt}" class="image-fill"{hidden}>
      </div>
    </div>"#,
                n = i + 1,
                src = escape_html(&slide.image),
                alt = escape_html(&slide.alt),
            )
        })
        .collect();

    let dots: String = (0..total)
        .map(|i| {
            let (class, pressed, tab) = if i == active {
                (" w-active", "true", "0")
            } else {
                ("", "false", "-1")
            };
            format!(
                r#"<div class="w-slider-dot{class}" data-wf-ignore="" aria-label="Show slide {n} of {total}" aria-pressed="{pressed}" role="button" tabindex="{tab}"></div>"#,
                n = i + 1
            )
        })
        .collect();

    format!(
        r#"<div data-delay="5" data-animation="slide" class="about-slider w-slider" data-autoplay="true" data-easing="ease-out-quad" data-hide-arrows="false" data-disable-swipe="false" data-autoplay-limit="1" data-nav-spacing="3" data-duration="700" data-infinite="true" role="region" aria-label="carousel">
  <div class="about-slider-mask w-slider-mask">{items}
    <div aria-live="off" aria-atomic="true" class="w-slider-aria-label" data-wf-ignore="">Slide {current} of {total}.</div>
  </div>
  <div class="hide w-slider-nav w-round">{dots}</div>
</div>"#,
        current = active + 1
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TEMPLATE: &str = r#"<section>
<p class="text-size-regular text-color-white">Empowering Brand Excellence</p>
<p class="text-size-regular text-color-white">We are a premier brand management company
 focused on multiple industries.</p>
<h3 class="heading-style-h3">Our Story</h3>
<h1 class="text-size-xl text-align-center">"We transform brands into market leaders through strategic excellence"</h1>
<p class="text-size-small text-style-allcaps text-weight-normal">Sarah Mitchell</p><img src="images/bold-star-light.svg" loading="lazy" alt="" class="quote-star"/><p class="text-size-small text-style-allcaps text-weight-normal">CEO, Ventured Brands</p>
<div data-delay="5" data-animation="slide" class="about-slider w-slider">
  <div class="mask"><div class="slide">a</div>
  </div>
</div>
</section>"#;

    fn content(v: serde_json::Value) -> AboutContent {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn hero_and_quote_are_replaced() {
        let out = render_about(
            TEMPLATE,
            &content(json!({
                "hero": {"subtitle": "Brands that last", "description": "Short & sweet", "storyTitle": "How we started"},
                "quote": {"text": "Build <well>", "author": "Jane Doe"}
            })),
        );
        assert!(out.html.contains(">Brands that last</p>"));
        assert!(out.html.contains(">Short &amp; sweet</p>"));
        assert!(out.html.contains(r#"<h3 class="heading-style-h3">How we started</h3>"#));
        assert!(out.html.contains(r#">"Build &lt;well&gt;"</h1>"#));
        assert!(out.html.contains(">Jane Doe</p>"));
        assert!(!out.html.contains("Sarah Mitchell"));
        assert!(out.unmatched.is_empty());
    }

    #[test]
    fn empty_strings_leave_template_text() {
        let out = render_about(TEMPLATE, &content(json!({"hero": {"subtitle": ""}})));
        assert_eq!(out.html, TEMPLATE);
        assert!(out.unmatched.is_empty());
    }

    #[test]
    fn gallery_marks_second_slide_active() {
        let out = render_about(
            TEMPLATE,
            &content(json!({"gallery": {"slides": [
                {"image": "a.webp", "alt": "A"},
                {"image": "b.webp", "alt": "B"},
                {"image": "c.webp", "alt": "C"}
            ]}})),
        );
        assert!(out.html.contains(r#"aria-label="2 of 3" role="group">"#));
        assert!(out.html.contains("Slide 2 of 3."));
        assert_eq!(out.html.matches("w-slider-dot w-active").count(), 1);
        assert!(out.html.ends_with("</div>\n</section>"));
    }

    #[test]
    fn missing_story_fragment_is_reported() {
        let out = render_about(TEMPLATE, &content(json!({"story": {"title": "Mission"}})));
        assert_eq!(out.unmatched, vec!["story.title"]);
    }
}
