use web_sys::MouseEvent;
use yew::prelude::*;

/// Accordion where opening one answer closes the previous one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaqState {
    open: Option<usize>,
}

impl FaqState {
    pub fn is_open(&self, entry: usize) -> bool {
        self.open == Some(entry)
    }

    pub fn toggled(self, entry: usize) -> Self {
        if self.is_open(entry) {
            Self { open: None }
        } else {
            Self { open: Some(entry) }
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.is_open.to_string()}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            if props.is_open {
                <div class="faq-answer">
                    <p>{&props.answer}</p>
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub entries: Vec<FaqEntry>,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let state = use_state(FaqState::default);

    html! {
        <div class="faq-list">
            <style>
                {r#"
                    .faq-list {
                        max-width: 48rem;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }
                    .faq-item {
                        background: #fff;
                        border: 1px solid #e2e8f0;
                        border-radius: 0.75rem;
                        overflow: hidden;
                    }
                    .faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1.1rem 1.25rem;
                        background: none;
                        border: none;
                        font-size: 1.05rem;
                        font-weight: 600;
                        color: #1e3a8a;
                        text-align: left;
                        cursor: pointer;
                    }
                    .toggle-icon {
                        font-size: 1.4rem;
                        color: #f97316;
                    }
                    .faq-answer {
                        padding: 0 1.25rem 1.1rem;
                        color: #475569;
                        line-height: 1.6;
                    }
                "#}
            </style>
            { for props.entries.iter().enumerate().map(|(i, entry)| {
                let on_toggle = {
                    let state = state.clone();
                    Callback::from(move |_: ()| state.set((*state).toggled(i)))
                };
                html! {
                    <FaqItem
                        key={i}
                        question={entry.question}
                        answer={entry.answer}
                        is_open={state.is_open(i)}
                        {on_toggle}
                    />
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_closes_the_other() {
        let state = FaqState::default().toggled(0).toggled(2);
        assert!(!state.is_open(0));
        assert!(state.is_open(2));
    }

    #[test]
    fn toggling_twice_closes() {
        let state = FaqState::default().toggled(1).toggled(1);
        assert_eq!(state, FaqState::default());
    }
}
