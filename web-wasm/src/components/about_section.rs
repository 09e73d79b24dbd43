//! 自己紹介セクション

use codestore::effects::Target;
use leptos::prelude::*;

const SKILLS: &[(&str, &[&str])] = &[
    ("frontend", &["TypeScript", "React", "Next.js", "Tailwind CSS"]),
    ("backend", &["Node.js", "Go", "PostgreSQL", "REST / GraphQL"]),
    ("tooling", &["Docker", "GitHub Actions", "Vercel", "AI-assisted workflows"]),
];

#[component]
pub fn AboutSection() -> impl IntoView {
    let skills = SKILLS
        .iter()
        .map(|(group, items)| {
            view! {
                <div class="skill-group">
                    <span class="json-key">{format!("\"{}\"", group)}</span>
                    <ul>
                        {items.iter().map(|item| view! { <li class="tech-tag">{*item}</li> }).collect_view()}
                    </ul>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="about" class="about-section" data-fx=Target::Section("about".into()).key() data-reveal="">
            <h2 class="text-section">
                <span class="text-white">"cat "</span>
                <span class="gradient-text-pink">"about.json"</span>
            </h2>

            <div class="about-grid">
                <div class="about-text">
                    <p>
                        "I'm a Full Stack Developer with 3+ years of experience in web development. "
                        "I have a passion for designing intuitive user interfaces, building with modern "
                        "frameworks, and leveraging AI to supercharge developer workflows."
                    </p>
                    <p>
                        "I'm currently looking for roles as a Front-End Developer, Back-End Developer, "
                        "or Full Stack Developer."
                    </p>
                </div>
                <div class="about-skills">{skills}</div>
            </div>
        </section>
    }
}
