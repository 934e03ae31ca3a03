//! Signed-out landing page with the OAuth entry point

use dioxus::prelude::*;

use crate::auth;

#[component]
pub fn Landing(error: Option<String>) -> Element {
    rsx! {
        div { class: "landing",
            nav { class: "landing-nav",
                div { class: "landing-brand",
                    span { class: "brand-mark", "B" }
                    span { class: "brand-name", "Blazel" }
                }
                button {
                    class: "landing-signin",
                    onclick: move |_| auth::login(),
                    "Sign In"
                }
            }

            section { class: "landing-hero",
                span { class: "hero-pill", "AI-Powered Content Generation" }
                h1 { class: "hero-title",
                    "LinkedIn Posts That "
                    span { class: "hero-accent", "Sound Like You" }
                }
                p { class: "hero-tagline",
                    "Generate authentic LinkedIn content with AI that learns your voice. "
                    "Every edit you make trains the model to write more like you."
                }
                if let Some(message) = error {
                    div { class: "landing-error", "{message}" }
                }
                button {
                    class: "hero-cta",
                    onclick: move |_| auth::login(),
                    "Get Started Free →"
                }
            }

            section { class: "landing-steps",
                h2 { "How the Feedback Loop Works" }
                p { class: "section-sub",
                    "The more you use Blazel, the better it understands your unique writing style"
                }
                div { class: "step-grid",
                    div { class: "step-card",
                        span { class: "step-number step-blue", "1" }
                        h3 { "Generate" }
                        p {
                            "Enter a topic and let AI create a LinkedIn post draft tailored to professional audiences."
                        }
                    }
                    div { class: "step-card",
                        span { class: "step-number step-purple", "2" }
                        h3 { "Refine" }
                        p {
                            "Edit the post directly in our rich text editor. Add comments about your preferences."
                        }
                    }
                    div { class: "step-card",
                        span { class: "step-number step-green", "3" }
                        h3 { "Learn" }
                        p {
                            "Your feedback trains a personalized model. Future posts match your voice automatically."
                        }
                    }
                }
            }

            section { class: "landing-features",
                div { class: "feature-column",
                    h2 { "AI That Adapts to Your Voice" }
                    div { class: "feature-item",
                        span { class: "feature-icon", "✓" }
                        div {
                            h3 { "Direct Preference Optimization" }
                            p { "Advanced RL technique that learns from your edits, not just your approvals." }
                        }
                    }
                    div { class: "feature-item",
                        span { class: "feature-icon", "⚡" }
                        div {
                            h3 { "Few-Shot Learning" }
                            p { "See improvements after just 3-5 feedback samples. No massive datasets needed." }
                        }
                    }
                    div { class: "feature-item",
                        span { class: "feature-icon", "🧠" }
                        div {
                            h3 { "Personal LoRA Adapters" }
                            p { "Each user gets their own fine-tuned model weights. Your style, your model." }
                        }
                    }
                }
                div { class: "code-card",
                    div { class: "window-dots",
                        span { class: "window-dot dot-red" }
                        span { class: "window-dot dot-yellow" }
                        span { class: "window-dot dot-green" }
                    }
                    div { class: "code-lines",
                        p { class: "code-dim", "# Your feedback becomes training data" }
                        p {
                            span { class: "code-purple", "prompt" }
                            span { class: "code-dim", ": \"Write about AI trends\"" }
                        }
                        p {
                            span { class: "code-red", "rejected" }
                            span { class: "code-dim", ": \"AI is revolutionizing...\"" }
                        }
                        p {
                            span { class: "code-green", "chosen" }
                            span { class: "code-dim", ": \"Here's what I learned...\"" }
                        }
                        p { class: "code-train",
                            span { class: "code-blue", "model.train" }
                            span { class: "code-dim", "(dpo_loss)" }
                        }
                    }
                }
            }

            section { class: "landing-cta",
                div { class: "cta-card",
                    h2 { "Ready to Write Smarter?" }
                    p { "Join the feedback loop. Let AI learn your voice." }
                    button {
                        class: "cta-button",
                        onclick: move |_| auth::login(),
                        "Start Writing →"
                    }
                }
            }

            footer { class: "landing-footer",
                div { class: "landing-brand",
                    span { class: "brand-mark brand-mark-small", "B" }
                    span { class: "footer-name", "Blazel" }
                }
                p { "AI-powered content that learns your voice" }
            }
        }
    }
}
