use chrono::Datelike;
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::contact_form::ContactFormSection;
use crate::components::faq::{Faq, FaqEntry};
use crate::components::gallery::Gallery;
use crate::config;
use crate::contact::{tel_link, whatsapp_link};
use crate::gallery::catalog::{Catalog, GalleryItem};

const STRUCTURE_PHOTOS: [(&str, &str); 5] = [
    ("https://images.unsplash.com/photo-1564069114553-7215e1ff1890?q=80&w=1600&auto=format&fit=crop", "Estrutura da clínica"),
    ("https://images.unsplash.com/photo-1519710164239-da123dc03ef4?q=80&w=1600&auto=format&fit=crop", "Quartos amplos e arejados"),
    ("https://images.unsplash.com/photo-1501785888041-af3ef285b470?q=80&w=1600&auto=format&fit=crop", "Área verde para reflexão"),
    ("https://images.unsplash.com/photo-1556910103-1c02745aae4d?q=80&w=1600&auto=format&fit=crop", "Refeitório com cardápio balanceado"),
    ("https://images.unsplash.com/photo-1571902943202-507ec2618e8f?q=80&w=1600&auto=format&fit=crop", "Espaço para atividades físicas"),
];

const UNIT_PHOTOS: [(&str, &str); 6] = [
    ("https://images.unsplash.com/photo-1600585154340-be6161a56a0c?q=80&w=1200&auto=format&fit=crop", "Unidade Atibaia"),
    ("https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?q=80&w=1200&auto=format&fit=crop", "Unidade Itapecerica da Serra"),
    ("https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?q=80&w=1200&auto=format&fit=crop", "Unidade Mairiporã"),
    ("https://images.unsplash.com/photo-1600566753190-17f0baa2a6c3?q=80&w=1200&auto=format&fit=crop", "Unidade Feminina Cotia"),
    ("https://images.unsplash.com/photo-1600047509807-ba8f99d2cdde?q=80&w=1200&auto=format&fit=crop", "Unidade Juquitiba"),
    ("https://images.unsplash.com/photo-1600573472550-8090b5e0745e?q=80&w=1200&auto=format&fit=crop", "Unidade Embu-Guaçu"),
];

struct Unit {
    name: &'static str,
    city: &'static str,
    audience: &'static str,
}

const UNITS: [Unit; 6] = [
    Unit { name: "Unidade Atibaia", city: "Atibaia - SP", audience: "Masculina" },
    Unit { name: "Unidade Itapecerica", city: "Itapecerica da Serra - SP", audience: "Masculina" },
    Unit { name: "Unidade Mairiporã", city: "Mairiporã - SP", audience: "Masculina" },
    Unit { name: "Unidade Cotia", city: "Cotia - SP", audience: "Feminina" },
    Unit { name: "Unidade Juquitiba", city: "Juquitiba - SP", audience: "Masculina" },
    Unit { name: "Unidade Embu-Guaçu", city: "Embu-Guaçu - SP", audience: "Terapêutica" },
];

const TESTIMONIALS: [(&str, &str); 3] = [
    ("Meu filho voltou para casa outra pessoa. A equipe acolheu nossa família inteira durante todo o processo.", "Célia, mãe de paciente"),
    ("Eu já tinha tentado parar sozinho muitas vezes. Aqui entendi a doença e ganhei ferramentas para recomeçar.", "Ricardo, 3 anos em recuperação"),
    ("O atendimento 24h fez toda a diferença na madrugada em que mais precisamos.", "Paulo, irmão de paciente"),
];

const DIFFERENTIALS: [(&str, &str, &str); 5] = [
    ("❤️", "Tratamento Humanizado", "O paciente é tratado com amor e respeito, não como um número."),
    ("🕒", "Monitoramento 24 Horas", "Equipe de enfermagem e cuidadores disponíveis dia e noite."),
    ("👪", "Apoio Familiar", "A família recebe orientação e suporte durante todo o processo."),
    ("📍", "Localização Discreta", "Ambiente tranquilo, em contato com a natureza, preservando o sigilo."),
    ("🩺", "Equipe Experiente", "Profissionais com mais de 10 anos de experiência em reabilitação."),
];

fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "Como funciona a internação?",
            answer: "Após o primeiro contato, realizamos uma avaliação médica e psicológica. A internação pode ser voluntária ou involuntária, sempre dentro da legislação vigente e com acompanhamento da família.",
        },
        FaqEntry {
            question: "Quanto tempo dura o tratamento?",
            answer: "O plano é individualizado, mas a fase intensiva costuma durar de 6 a 9 meses, seguida da etapa de ressocialização.",
        },
        FaqEntry {
            question: "A família pode visitar o paciente?",
            answer: "Sim. As visitas acontecem em dias programados e fazem parte do tratamento, junto com os encontros de orientação familiar.",
        },
        FaqEntry {
            question: "Vocês fazem o resgate do paciente?",
            answer: "Sim. Contamos com transporte de resgate especializado, disponível 24 horas, com equipe treinada para uma remoção segura e respeitosa.",
        },
        FaqEntry {
            question: "As informações são sigilosas?",
            answer: "Totalmente. Todo o atendimento é confidencial e as unidades ficam em locais discretos.",
        },
    ]
}

fn catalog(photos: &[(&str, &str)]) -> Catalog {
    photos
        .iter()
        .map(|(image_ref, caption)| GalleryItem::new(*image_ref, *caption))
        .collect()
}

fn scroll_to_contact() {
    let target = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id("contato"));
    if let Some(element) = target {
        let mut options = ScrollIntoViewOptions::new();
        options.behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let structure = use_memo(|_| catalog(&STRUCTURE_PHOTOS), ());
    let units = use_memo(|_| catalog(&UNIT_PHOTOS), ());

    let on_help = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_contact();
    });
    let greeting_link = whatsapp_link(config::WHATSAPP_NUMBER, Some(config::WHATSAPP_GREETING));
    let location_link = whatsapp_link(
        config::WHATSAPP_NUMBER,
        Some("Olá, gostaria de receber a localização exata da unidade."),
    );
    let year = chrono::Local::now().year();

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page {
                        background: #f8fafc;
                        color: #1e293b;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .section {
                        padding: 5rem 1.5rem;
                    }
                    .container {
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    .section-title {
                        font-size: 2rem;
                        font-weight: 700;
                        color: #1e3a8a;
                        text-align: center;
                        margin-bottom: 1rem;
                    }
                    .section-lead {
                        text-align: center;
                        color: #475569;
                        margin-bottom: 3rem;
                    }
                    .btn {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 0.85rem 1.75rem;
                        border-radius: 0.6rem;
                        font-weight: 700;
                        border: none;
                        cursor: pointer;
                        text-decoration: none;
                        transition: all 0.3s ease;
                    }
                    .btn-primary { background: #f97316; color: #fff; }
                    .btn-primary:hover { background: #ea580c; transform: translateY(-2px); }
                    .btn-outline { border: 2px solid #fff; color: #fff; background: transparent; }
                    .btn-whatsapp { background: #22c55e; color: #fff; }
                    .btn-block { width: 100%; }
                    .hero {
                        position: relative;
                        padding: 10rem 1.5rem 6rem;
                        background: #1e3a8a;
                        color: #fff;
                        overflow: hidden;
                    }
                    .hero-badge {
                        display: inline-block;
                        padding: 0.25rem 1rem;
                        border-radius: 9999px;
                        background: #1e40af;
                        color: #bfdbfe;
                        font-size: 0.85rem;
                        margin-bottom: 1.5rem;
                    }
                    .hero h1 {
                        font-size: 3rem;
                        line-height: 1.15;
                        margin-bottom: 1.5rem;
                    }
                    .hero h1 span { color: #fb923c; }
                    .hero p { color: #dbeafe; font-size: 1.15rem; max-width: 40rem; margin-bottom: 2rem; }
                    .hero-actions { display: flex; gap: 1rem; flex-wrap: wrap; }
                    .checks, .steps, .units-grid, .testimonials {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }
                    .check, .step, .unit-card, .testimonial {
                        background: #fff;
                        border: 1px solid #f1f5f9;
                        border-radius: 1rem;
                        padding: 1.5rem;
                        box-shadow: 0 1px 3px rgba(15, 23, 42, 0.06);
                    }
                    .step-number {
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 0.75rem;
                        background: #dbeafe;
                        color: #2563eb;
                        font-weight: 700;
                        font-size: 1.25rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 1.25rem;
                    }
                    .differentials { display: flex; flex-direction: column; gap: 1.5rem; }
                    .differential { display: flex; gap: 1rem; }
                    .differential h4 { margin: 0 0 0.25rem; }
                    .location {
                        background: #1e3a8a;
                        color: #fff;
                        text-align: center;
                    }
                    .location .section-title { color: #fff; }
                    .unit-card h3 { color: #1e3a8a; margin-bottom: 0.25rem; }
                    .unit-tag {
                        display: inline-block;
                        font-size: 0.75rem;
                        font-weight: 700;
                        color: #15803d;
                        background: #dcfce7;
                        padding: 0.15rem 0.6rem;
                        border-radius: 0.5rem;
                    }
                    .testimonial blockquote { font-style: italic; color: #334155; margin: 0 0 1rem; }
                    .testimonial cite { color: #2563eb; font-weight: 600; font-style: normal; }
                    .contact-card {
                        max-width: 42rem;
                        margin: 0 auto;
                        background: #fff;
                        padding: 3rem;
                        border-radius: 1rem;
                        box-shadow: 0 20px 25px rgba(15, 23, 42, 0.1);
                    }
                    .form-field { display: flex; flex-direction: column; gap: 0.35rem; margin-bottom: 1rem; }
                    .form-field input, .form-field select {
                        padding: 0.75rem;
                        border-radius: 0.5rem;
                        border: 1px solid #cbd5e1;
                    }
                    .form-error { color: #dc2626; font-weight: 600; }
                    .form-privacy { margin-top: 1rem; font-size: 0.75rem; color: #64748b; text-align: center; }
                    .footer {
                        background: #0f172a;
                        color: #94a3b8;
                        padding: 3rem 1.5rem;
                        font-size: 0.9rem;
                    }
                    .footer-row { display: flex; justify-content: space-between; flex-wrap: wrap; gap: 1rem; }
                    .floating-whatsapp {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        z-index: 50;
                        border-radius: 9999px;
                        padding: 1rem 1.25rem;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    @media (max-width: 768px) {
                        .hero h1 { font-size: 2.1rem; }
                        .checks, .steps, .units-grid, .testimonials {
                            grid-template-columns: 1fr;
                        }
                        .contact-card { padding: 1.5rem; }
                    }
                "#}
            </style>

            <header class="hero">
                <div class="container">
                    <span class="hero-badge">{"❤️ Atendimento Humanizado 24 horas"}</span>
                    <h1>
                        {"A recuperação começa com um passo. "}
                        <span>{"Dê esse passo hoje."}</span>
                    </h1>
                    <p>
                        {"Seja qual for o vício (álcool, drogas, jogos), existe um caminho de volta. No "}
                        {config::CLINIC_NAME}
                        {", você e sua família não precisam trilhar isso sozinhos."}
                    </p>
                    <div class="hero-actions">
                        <button class="btn btn-primary" onclick={on_help}>{"Quero ajuda agora"}</button>
                        <a class="btn btn-outline" href={greeting_link} target="_blank" rel="noopener noreferrer">
                            {"📞 Falar com Especialista"}
                        </a>
                    </div>
                </div>
            </header>

            <section class="section">
                <div class="container">
                    <h2 class="section-title">{"Entendemos o que você está passando"}</h2>
                    <p class="section-lead">
                        {"Sabemos que pedir ajuda não é fácil. Muitos tentam sozinhos, mas a doença da adicção é complexa e recaídas acontecem. Aqui, você encontra acolhimento, cuidado e tratamento especializado, sem julgamentos."}
                    </p>
                    <div class="checks">
                        <div class="check">{"✅ Ambiente Seguro e Livre de Drogas"}</div>
                        <div class="check">{"✅ Equipe Multidisciplinar Especializada"}</div>
                        <div class="check">{"✅ Foco em Recomeços Reais e Duradouros"}</div>
                    </div>
                </div>
            </section>

            <section id="tratamento" class="section">
                <div class="container">
                    <h2 class="section-title">{"Nossa Metodologia de Tratamento"}</h2>
                    <p class="section-lead">{"Um processo estruturado para resgatar a saúde física, mental e espiritual."}</p>
                    <div class="steps">
                        <div class="step">
                            <div class="step-number">{"1"}</div>
                            <h3>{"Acolhimento e Avaliação"}</h3>
                            <p>{"Recepção empática do paciente e da família. Avaliação médica e psicológica completa para definir o plano de tratamento individualizado."}</p>
                        </div>
                        <div class="step">
                            <div class="step-number">{"2"}</div>
                            <h3>{"Tratamento Personalizado"}</h3>
                            <p>{"Desintoxicação monitorada, terapias em grupo e individuais, atividades físicas e reeducação comportamental com apoio 24h."}</p>
                        </div>
                        <div class="step">
                            <div class="step-number">{"3"}</div>
                            <h3>{"Ressocialização"}</h3>
                            <p>{"Preparação para a volta ao convívio social. Fortalecimento dos vínculos familiares, plano de prevenção à recaída e projeto de vida."}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section id="diferenciais" class="section">
                <div class="container">
                    <h2 class="section-title">{"Por que escolher o "}{config::CLINIC_NAME}{"?"}</h2>
                    <Gallery catalog={(*structure).clone()} config={config::structure_slideshow()} />
                    <div class="differentials">
                        { for DIFFERENTIALS.iter().map(|(icon, title, desc)| html! {
                            <div class="differential">
                                <div>{*icon}</div>
                                <div>
                                    <h4>{*title}</h4>
                                    <p>{*desc}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="unidades" class="section">
                <div class="container">
                    <h2 class="section-title">{"Nossas Unidades"}</h2>
                    <p class="section-lead">{"Clique em uma foto para ampliar."}</p>
                    <Gallery catalog={(*units).clone()} config={config::units_gallery()} />
                    <div class="units-grid">
                        { for UNITS.iter().map(|unit| html! {
                            <div class="unit-card">
                                <span class="unit-tag">{unit.audience}</span>
                                <h3>{unit.name}</h3>
                                <p>{unit.city}</p>
                                <a
                                    class="btn btn-whatsapp"
                                    href={whatsapp_link(config::WHATSAPP_NUMBER, Some(&format!("Olá, gostaria de informações sobre a {}.", unit.name)))}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    {"Falar sobre esta unidade"}
                                </a>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="localizacao" class="section location">
                <div class="container">
                    <h2 class="section-title">{"Estamos prontos para receber quem você ama"}</h2>
                    <p>{"Localizados em uma área verde privilegiada, oferecemos a tranquilidade necessária para a reflexão e recuperação."}</p>
                    <a class="btn btn-primary" href={location_link} target="_blank" rel="noopener noreferrer">
                        {"📍 Solicitar Localização Exata via WhatsApp"}
                    </a>
                    <p>{"🕒 Internações Imediatas 24h · 🛡️ Transporte de Resgate Especializado"}</p>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <h2 class="section-title">{"Histórias de recomeço"}</h2>
                    <div class="testimonials">
                        { for TESTIMONIALS.iter().map(|(quote, author)| html! {
                            <figure class="testimonial">
                                <blockquote>{*quote}</blockquote>
                                <cite>{*author}</cite>
                            </figure>
                        }) }
                    </div>
                </div>
            </section>

            <section id="faq" class="section">
                <div class="container">
                    <h2 class="section-title">{"Perguntas Frequentes"}</h2>
                    <Faq entries={faq_entries()} />
                </div>
            </section>

            <section id="contato" class="section">
                <div class="contact-card">
                    <h2 class="section-title">{"Fale com um especialista agora"}</h2>
                    <p class="section-lead">{"Preencha o formulário abaixo. Sua recuperação começa aqui."}</p>
                    <ContactFormSection />
                </div>
            </section>

            <footer class="footer">
                <div class="container">
                    <div class="footer-row">
                        <strong>{config::CLINIC_NAME.to_uppercase()}</strong>
                        <a href={tel_link(config::HOTLINE)}>{"Plantão: "}{config::HOTLINE}</a>
                    </div>
                    <div class="footer-row">
                        <p>{format!("© {} {}. Todos os direitos reservados.", year, config::CLINIC_NAME)}</p>
                        <p>{"Responsável Técnico: Dr. Modelo CRM/SP 12345"}</p>
                    </div>
                </div>
            </footer>

            <a class="btn btn-whatsapp floating-whatsapp" href={whatsapp_link(config::WHATSAPP_NUMBER, None)} target="_blank" rel="noopener noreferrer">
                {"💬 Ajuda Online"}
            </a>
        </div>
    }
}
