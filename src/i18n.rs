//! Copy for every visible string on the page, one typed table per language.

use yew::prelude::*;

use crate::enquiry::draft::Interest;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    En,
    Es,
    Hi,
}

impl Lang {
    pub const ALL: [Lang; 3] = [Lang::En, Lang::Es, Lang::Hi];

    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
            Lang::Hi => "hi",
        }
    }

    /// Name of the language in itself, as listed in the selector.
    pub fn native_name(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Es => "Español",
            Lang::Hi => "हिंदी",
        }
    }

    pub fn strings(&self) -> &'static Strings {
        match self {
            Lang::En => &EN,
            Lang::Es => &ES,
            Lang::Hi => &HI,
        }
    }
}

pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct Strings {
    pub nav_home: &'static str,
    pub nav_courses: &'static str,
    pub nav_how_it_works: &'static str,
    pub nav_contact: &'static str,
    pub nav_sign_in: &'static str,
    pub nav_log_in: &'static str,
    pub nav_logout: &'static str,
    pub nav_language: &'static str,
    pub login_prompt: &'static str,

    pub hero_title1: &'static str,
    pub hero_title2: &'static str,
    pub hero_get_started: &'static str,
    pub hero_explore_courses: &'static str,
    pub hero_voice: &'static str,

    pub courses_title: &'static str,
    pub courses_subtitle: &'static str,

    pub how_title: &'static str,
    pub how_subtitle: &'static str,
    pub steps: [Step; 5],

    pub faq_title: &'static str,
    pub faq_subtitle: &'static str,
    pub faqs: [FaqEntry; 6],

    pub enquiry_title: &'static str,
    pub enquiry_subtitle: &'static str,
    pub enquiry_full_name: &'static str,
    pub enquiry_email: &'static str,
    pub enquiry_phone: &'static str,
    pub enquiry_interest: &'static str,
    pub enquiry_interest_placeholder: &'static str,
    pub enquiry_interest_courses: &'static str,
    pub enquiry_interest_bootcamp: &'static str,
    pub enquiry_interest_degree: &'static str,
    pub enquiry_interest_certification: &'static str,
    pub enquiry_message: &'static str,
    pub enquiry_message_placeholder: &'static str,
    pub enquiry_submit: &'static str,
    pub enquiry_success_title: &'static str,
    pub enquiry_success_description: &'static str,
    pub enquiry_rejected_title: &'static str,
    pub enquiry_rejected_description: &'static str,
    pub enquiry_network_title: &'static str,
    pub enquiry_network_description: &'static str,

    pub footer_tagline: &'static str,
    pub footer_learn: &'static str,
    pub footer_learn_links: [&'static str; 5],
    pub footer_company: &'static str,
    pub footer_company_links: [&'static str; 4],
    pub footer_contact_info: &'static str,
    pub footer_email: &'static str,
    pub footer_phone: &'static str,
    pub footer_address: &'static str,
    pub footer_rights: &'static str,
}

impl Strings {
    pub fn interest_label(&self, interest: Interest) -> &'static str {
        match interest {
            Interest::Courses => self.enquiry_interest_courses,
            Interest::Bootcamp => self.enquiry_interest_bootcamp,
            Interest::Degree => self.enquiry_interest_degree,
            Interest::Certification => self.enquiry_interest_certification,
        }
    }
}

/// Current language plus the callback that changes it.
#[derive(Clone, PartialEq)]
pub struct LangContext {
    pub lang: Lang,
    pub set_lang: Callback<Lang>,
}

impl LangContext {
    pub fn strings(&self) -> &'static Strings {
        self.lang.strings()
    }
}

/// Strings for the current language, English outside a provider.
#[hook]
pub fn use_strings() -> &'static Strings {
    use_context::<LangContext>()
        .map(|ctx| ctx.strings())
        .unwrap_or_else(|| Lang::En.strings())
}

static EN: Strings = Strings {
    nav_home: "Home",
    nav_courses: "Courses",
    nav_how_it_works: "How It Works",
    nav_contact: "Contact",
    nav_sign_in: "Sign In",
    nav_log_in: "Log In",
    nav_logout: "Logout",
    nav_language: "Language",
    login_prompt: "Enter username (any text):",

    hero_title1: "Where Learning",
    hero_title2: "Meets Innovation",
    hero_get_started: "Get Started",
    hero_explore_courses: "Explore Courses",
    hero_voice: "Voice search",

    courses_title: "Explore Courses",
    courses_subtitle: "From first grade to university degrees, find your path",

    how_title: "How It Works",
    how_subtitle: "Your journey to success in five simple steps",
    steps: [
        Step { title: "Sign Up", description: "Create your free account in seconds and tell us about your goals." },
        Step { title: "Choose Your Path", description: "Get personalized course recommendations based on your interests." },
        Step { title: "Learn at Your Pace", description: "Study with interactive lessons, videos and AI-powered tutoring." },
        Step { title: "Track Progress", description: "Follow your growth with detailed analytics and milestones." },
        Step { title: "Get Certified", description: "Earn globally recognized certificates and degrees." },
    ],

    faq_title: "Frequently Asked Questions",
    faq_subtitle: "Everything you need to know about learning with Eduverse",
    faqs: [
        FaqEntry { question: "Who can learn on Eduverse?", answer: "Everyone. We offer programs from elementary school through university degrees and professional certifications." },
        FaqEntry { question: "Are the certificates recognized?", answer: "Yes. Our certifications and degrees are issued with accredited partners and recognized by employers worldwide." },
        FaqEntry { question: "Can I learn at my own pace?", answer: "Absolutely. Most courses are self-paced, and live sessions are recorded so you never miss a class." },
        FaqEntry { question: "How does AI-powered learning work?", answer: "Our AI tutor adapts lessons and exercises to your progress, suggesting what to review and what to learn next." },
        FaqEntry { question: "Do you offer financial aid?", answer: "Yes. Scholarships and flexible payment plans are available for most bootcamps and degree programs." },
        FaqEntry { question: "How do I get started?", answer: "Fill in the enquiry form below and our team will contact you within 24 hours to plan your learning path." },
    ],

    enquiry_title: "Start Your Journey",
    enquiry_subtitle: "Tell us about your goals and we'll get back to you",
    enquiry_full_name: "Full Name",
    enquiry_email: "Email",
    enquiry_phone: "Phone",
    enquiry_interest: "I'm interested in",
    enquiry_interest_placeholder: "Select an option",
    enquiry_interest_courses: "Online Courses",
    enquiry_interest_bootcamp: "Bootcamp",
    enquiry_interest_degree: "Degree Program",
    enquiry_interest_certification: "Certification",
    enquiry_message: "Message",
    enquiry_message_placeholder: "Tell us about your learning goals...",
    enquiry_submit: "Submit Enquiry",
    enquiry_success_title: "Enquiry Submitted Successfully! 🎉",
    enquiry_success_description: "Our team has received your message and will contact you within 24 hours.",
    enquiry_rejected_title: "Submission Failed",
    enquiry_rejected_description: "There was an issue submitting your enquiry. Please try again.",
    enquiry_network_title: "Error",
    enquiry_network_description: "A network error occurred. Please check your connection.",

    footer_tagline: "Empowering learners worldwide with innovative education.",
    footer_learn: "Learn",
    footer_learn_links: ["Browse Courses", "Bootcamps", "Degrees", "Free Courses", "Certifications"],
    footer_company: "Company",
    footer_company_links: ["About Us", "Partners", "Careers", "Contact"],
    footer_contact_info: "Contact Info",
    footer_email: "hello@eduverse.com",
    footer_phone: "+1 (555) 123-4567",
    footer_address: "123 Learning Lane, Education City",
    footer_rights: "All rights reserved.",
};

static ES: Strings = Strings {
    nav_home: "Inicio",
    nav_courses: "Cursos",
    nav_how_it_works: "Cómo Funciona",
    nav_contact: "Contacto",
    nav_sign_in: "Registrarse",
    nav_log_in: "Iniciar Sesión",
    nav_logout: "Cerrar Sesión",
    nav_language: "Idioma",
    login_prompt: "Introduce un nombre de usuario (cualquier texto):",

    hero_title1: "Donde el Aprendizaje",
    hero_title2: "Se Une a la Innovación",
    hero_get_started: "Comenzar",
    hero_explore_courses: "Explorar Cursos",
    hero_voice: "Búsqueda por voz",

    courses_title: "Explora los Cursos",
    courses_subtitle: "Desde primer grado hasta títulos universitarios, encuentra tu camino",

    how_title: "Cómo Funciona",
    how_subtitle: "Tu camino al éxito en cinco sencillos pasos",
    steps: [
        Step { title: "Regístrate", description: "Crea tu cuenta gratuita en segundos y cuéntanos tus objetivos." },
        Step { title: "Elige tu Camino", description: "Recibe recomendaciones de cursos personalizadas según tus intereses." },
        Step { title: "Aprende a tu Ritmo", description: "Estudia con lecciones interactivas, vídeos y tutorías con IA." },
        Step { title: "Sigue tu Progreso", description: "Observa tu crecimiento con análisis detallados e hitos." },
        Step { title: "Obtén tu Certificado", description: "Consigue certificados y títulos reconocidos mundialmente." },
    ],

    faq_title: "Preguntas Frecuentes",
    faq_subtitle: "Todo lo que necesitas saber para aprender con Eduverse",
    faqs: [
        FaqEntry { question: "¿Quién puede aprender en Eduverse?", answer: "Todo el mundo. Ofrecemos programas desde primaria hasta títulos universitarios y certificaciones profesionales." },
        FaqEntry { question: "¿Los certificados están reconocidos?", answer: "Sí. Nuestras certificaciones y títulos se emiten con socios acreditados y son reconocidos por empresas de todo el mundo." },
        FaqEntry { question: "¿Puedo aprender a mi ritmo?", answer: "Por supuesto. La mayoría de los cursos son a tu ritmo y las sesiones en vivo quedan grabadas." },
        FaqEntry { question: "¿Cómo funciona el aprendizaje con IA?", answer: "Nuestro tutor de IA adapta lecciones y ejercicios a tu progreso y te sugiere qué repasar y qué aprender después." },
        FaqEntry { question: "¿Ofrecen ayuda financiera?", answer: "Sí. Hay becas y planes de pago flexibles para la mayoría de bootcamps y programas de grado." },
        FaqEntry { question: "¿Cómo empiezo?", answer: "Completa el formulario de abajo y nuestro equipo te contactará en 24 horas para planificar tu aprendizaje." },
    ],

    enquiry_title: "Comienza tu Viaje",
    enquiry_subtitle: "Cuéntanos tus objetivos y te responderemos",
    enquiry_full_name: "Nombre Completo",
    enquiry_email: "Correo Electrónico",
    enquiry_phone: "Teléfono",
    enquiry_interest: "Me interesa",
    enquiry_interest_placeholder: "Selecciona una opción",
    enquiry_interest_courses: "Cursos en Línea",
    enquiry_interest_bootcamp: "Bootcamp",
    enquiry_interest_degree: "Programa de Grado",
    enquiry_interest_certification: "Certificación",
    enquiry_message: "Mensaje",
    enquiry_message_placeholder: "Cuéntanos tus objetivos de aprendizaje...",
    enquiry_submit: "Enviar Consulta",
    enquiry_success_title: "¡Consulta Enviada con Éxito! 🎉",
    enquiry_success_description: "Nuestro equipo ha recibido tu mensaje y te contactará en 24 horas.",
    enquiry_rejected_title: "Error al Enviar",
    enquiry_rejected_description: "Hubo un problema al enviar tu consulta. Inténtalo de nuevo.",
    enquiry_network_title: "Error",
    enquiry_network_description: "Se produjo un error de red. Comprueba tu conexión.",

    footer_tagline: "Impulsando a estudiantes de todo el mundo con educación innovadora.",
    footer_learn: "Aprender",
    footer_learn_links: ["Ver Cursos", "Bootcamps", "Títulos", "Cursos Gratuitos", "Certificaciones"],
    footer_company: "Empresa",
    footer_company_links: ["Sobre Nosotros", "Socios", "Empleo", "Contacto"],
    footer_contact_info: "Contacto",
    footer_email: "hello@eduverse.com",
    footer_phone: "+1 (555) 123-4567",
    footer_address: "123 Learning Lane, Education City",
    footer_rights: "Todos los derechos reservados.",
};

static HI: Strings = Strings {
    nav_home: "होम",
    nav_courses: "पाठ्यक्रम",
    nav_how_it_works: "यह कैसे काम करता है",
    nav_contact: "संपर्क",
    nav_sign_in: "साइन इन",
    nav_log_in: "लॉग इन",
    nav_logout: "लॉग आउट",
    nav_language: "भाषा",
    login_prompt: "उपयोगकर्ता नाम दर्ज करें (कोई भी टेक्स्ट):",

    hero_title1: "जहाँ सीखना",
    hero_title2: "नवाचार से मिलता है",
    hero_get_started: "शुरू करें",
    hero_explore_courses: "पाठ्यक्रम देखें",
    hero_voice: "आवाज़ से खोजें",

    courses_title: "पाठ्यक्रम देखें",
    courses_subtitle: "पहली कक्षा से विश्वविद्यालय की डिग्री तक, अपना रास्ता चुनें",

    how_title: "यह कैसे काम करता है",
    how_subtitle: "पाँच आसान चरणों में सफलता की ओर",
    steps: [
        Step { title: "साइन अप करें", description: "कुछ ही सेकंड में मुफ़्त खाता बनाएँ और हमें अपने लक्ष्य बताएँ।" },
        Step { title: "अपना रास्ता चुनें", description: "अपनी रुचियों के अनुसार पाठ्यक्रम सुझाव पाएँ।" },
        Step { title: "अपनी गति से सीखें", description: "इंटरैक्टिव पाठ, वीडियो और एआई ट्यूटर के साथ पढ़ाई करें।" },
        Step { title: "प्रगति देखें", description: "विस्तृत विश्लेषण और पड़ावों के साथ अपनी प्रगति देखें।" },
        Step { title: "प्रमाणपत्र पाएँ", description: "विश्व स्तर पर मान्य प्रमाणपत्र और डिग्रियाँ अर्जित करें।" },
    ],

    faq_title: "अक्सर पूछे जाने वाले प्रश्न",
    faq_subtitle: "Eduverse के साथ सीखने के बारे में सब कुछ",
    faqs: [
        FaqEntry { question: "Eduverse पर कौन सीख सकता है?", answer: "हर कोई। हम प्राथमिक कक्षा से लेकर विश्वविद्यालय डिग्री और व्यावसायिक प्रमाणपत्र तक के कार्यक्रम देते हैं।" },
        FaqEntry { question: "क्या प्रमाणपत्र मान्य हैं?", answer: "हाँ। हमारे प्रमाणपत्र और डिग्रियाँ मान्यता प्राप्त भागीदारों के साथ जारी होती हैं।" },
        FaqEntry { question: "क्या मैं अपनी गति से सीख सकता हूँ?", answer: "बिल्कुल। अधिकांश पाठ्यक्रम स्व-गति वाले हैं और लाइव सत्र रिकॉर्ड किए जाते हैं।" },
        FaqEntry { question: "एआई आधारित शिक्षा कैसे काम करती है?", answer: "हमारा एआई ट्यूटर आपकी प्रगति के अनुसार पाठ और अभ्यास बदलता है।" },
        FaqEntry { question: "क्या आर्थिक सहायता उपलब्ध है?", answer: "हाँ। अधिकांश बूटकैंप और डिग्री कार्यक्रमों के लिए छात्रवृत्ति और किस्तों में भुगतान उपलब्ध है।" },
        FaqEntry { question: "मैं कैसे शुरू करूँ?", answer: "नीचे दिया गया फ़ॉर्म भरें, हमारी टीम 24 घंटे में आपसे संपर्क करेगी।" },
    ],

    enquiry_title: "अपनी यात्रा शुरू करें",
    enquiry_subtitle: "हमें अपने लक्ष्य बताएँ, हम आपसे संपर्क करेंगे",
    enquiry_full_name: "पूरा नाम",
    enquiry_email: "ईमेल",
    enquiry_phone: "फ़ोन",
    enquiry_interest: "मेरी रुचि है",
    enquiry_interest_placeholder: "एक विकल्प चुनें",
    enquiry_interest_courses: "ऑनलाइन पाठ्यक्रम",
    enquiry_interest_bootcamp: "बूटकैंप",
    enquiry_interest_degree: "डिग्री कार्यक्रम",
    enquiry_interest_certification: "प्रमाणपत्र",
    enquiry_message: "संदेश",
    enquiry_message_placeholder: "हमें अपने सीखने के लक्ष्यों के बारे में बताएँ...",
    enquiry_submit: "पूछताछ भेजें",
    enquiry_success_title: "पूछताछ सफलतापूर्वक भेजी गई! 🎉",
    enquiry_success_description: "हमारी टीम को आपका संदेश मिल गया है और वह 24 घंटे में संपर्क करेगी।",
    enquiry_rejected_title: "भेजना विफल रहा",
    enquiry_rejected_description: "आपकी पूछताछ भेजने में समस्या हुई। कृपया फिर से प्रयास करें।",
    enquiry_network_title: "त्रुटि",
    enquiry_network_description: "नेटवर्क त्रुटि हुई। कृपया अपना कनेक्शन जाँचें।",

    footer_tagline: "नवाचारी शिक्षा से दुनिया भर के विद्यार्थियों को सशक्त बनाना।",
    footer_learn: "सीखें",
    footer_learn_links: ["पाठ्यक्रम देखें", "बूटकैंप", "डिग्रियाँ", "मुफ़्त पाठ्यक्रम", "प्रमाणपत्र"],
    footer_company: "कंपनी",
    footer_company_links: ["हमारे बारे में", "भागीदार", "करियर", "संपर्क"],
    footer_contact_info: "संपर्क जानकारी",
    footer_email: "hello@eduverse.com",
    footer_phone: "+1 (555) 123-4567",
    footer_address: "123 Learning Lane, Education City",
    footer_rights: "सर्वाधिकार सुरक्षित।",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_distinct_code() {
        let codes: Vec<_> = Lang::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(codes, ["en", "es", "hi"]);
    }

    #[test]
    fn no_table_leaves_copy_empty() {
        for lang in Lang::ALL {
            let s = lang.strings();
            for step in &s.steps {
                assert!(!step.title.is_empty() && !step.description.is_empty());
            }
            for faq in &s.faqs {
                assert!(!faq.question.is_empty() && !faq.answer.is_empty());
            }
            for interest in Interest::ALL {
                assert!(!s.interest_label(interest).is_empty(), "{:?}", lang);
            }
            assert!(!s.enquiry_submit.is_empty());
            assert!(!s.login_prompt.is_empty());
        }
    }

    #[test]
    fn interest_labels_follow_language() {
        assert_eq!(Lang::En.strings().interest_label(Interest::Degree), "Degree Program");
        assert_eq!(Lang::Es.strings().interest_label(Interest::Degree), "Programa de Grado");
    }
}
