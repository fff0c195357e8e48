use crate::error::Result;
use crate::models::personality::{effects, GeneratedOption, GeneratedQuestion, Lang};
use crate::services::question_service::QuestionGenerator;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashMap;
use std::sync::Mutex;

const THEME_TRANSLATIONS: &[(&str, &str)] = &[
    ("viaje espacial", "space travel"),
    ("encuentro alienígena", "alien encounter"),
    ("paradoja temporal", "time paradox"),
    ("colonización espacial", "space colonization"),
];

/// Curated-catalog question generator. No network calls: a known theme gets a
/// random pick from its catalog entries, an unknown theme gets a deterministic
/// templated question. Serves both as the second tier of the generation chain
/// and as the hardcoded last resort.
pub struct SimpleQuestionGenerator {
    base_url: String,
    questions_en: HashMap<String, Vec<GeneratedQuestion>>,
    questions_es: HashMap<String, Vec<GeneratedQuestion>>,
    rng: Mutex<StdRng>,
}

impl SimpleQuestionGenerator {
    pub fn new(base_url: &str) -> Self {
        Self::with_rng(base_url, StdRng::from_entropy())
    }

    /// Deterministic catalog selection for tests.
    pub fn with_seed(base_url: &str, seed: u64) -> Self {
        Self::with_rng(base_url, StdRng::seed_from_u64(seed))
    }

    fn with_rng(base_url: &str, rng: StdRng) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            questions_en: catalog_en(base_url),
            questions_es: catalog_es(base_url),
            rng: Mutex::new(rng),
        }
    }

    pub fn question_for(&self, theme: &str, lang: Lang) -> GeneratedQuestion {
        let catalog = match lang {
            Lang::En => &self.questions_en,
            Lang::Es => &self.questions_es,
        };

        let key = if catalog.contains_key(theme) {
            theme.to_string()
        } else {
            translate_theme(theme).unwrap_or_else(|| theme.to_string())
        };

        if let Some(entries) = catalog.get(&key) {
            if !entries.is_empty() {
                let mut rng = match self.rng.lock() {
                    Ok(guard) => guard,
                    Err(poisoned) => poisoned.into_inner(),
                };
                if let Some(question) = entries.choose(&mut *rng) {
                    return question.clone();
                }
            }
        }

        self.fallback_question(theme, lang)
    }

    /// Templated last-resort question. Fully deterministic: identical
    /// theme+language inputs produce identical output.
    pub fn fallback_question(&self, theme: &str, lang: Lang) -> GeneratedQuestion {
        let context_image = format!(
            "{}/static/images/fallback/cosmic_default.webp",
            self.base_url
        );
        match lang {
            Lang::Es => GeneratedQuestion {
                question: format!("Pregunta fallback sobre {theme}"),
                scenario_description: format!(
                    "Descripción fallback de escenario sobre {theme}."
                ),
                context_image,
                options: vec![
                    opt(
                        &format!("Opción fallback 1 para {theme}"),
                        "🚀",
                        4,
                        &[("quantum_charisma", 10)],
                        &format!("Feedback fallback 1 para {theme}"),
                    ),
                    opt(
                        &format!("Opción fallback 2 para {theme}"),
                        "🔭",
                        3,
                        &[("absurdity_resistance", 8)],
                        &format!("Feedback fallback 2 para {theme}"),
                    ),
                    opt(
                        &format!("Opción fallback 3 para {theme}"),
                        "🌌",
                        2,
                        &[("time_warping", 12)],
                        &format!("Feedback fallback 3 para {theme}"),
                    ),
                    opt(
                        &format!("Opción fallback 4 para {theme}"),
                        "🛰️",
                        1,
                        &[("cosmic_luck", 5)],
                        &format!("Feedback fallback 4 para {theme}"),
                    ),
                ],
            },
            Lang::En => GeneratedQuestion {
                question: format!("Fallback question about {theme}"),
                scenario_description: format!("Fallback scenario description about {theme}."),
                context_image,
                options: vec![
                    opt(
                        &format!("Fallback option 1 for {theme}"),
                        "🚀",
                        4,
                        &[("quantum_charisma", 10)],
                        &format!("Fallback feedback 1 for {theme}"),
                    ),
                    opt(
                        &format!("Fallback option 2 for {theme}"),
                        "🔭",
                        3,
                        &[("absurdity_resistance", 8)],
                        &format!("Fallback feedback 2 for {theme}"),
                    ),
                    opt(
                        &format!("Fallback option 3 for {theme}"),
                        "🌌",
                        2,
                        &[("time_warping", 12)],
                        &format!("Fallback feedback 3 for {theme}"),
                    ),
                    opt(
                        &format!("Fallback option 4 for {theme}"),
                        "🛰️",
                        1,
                        &[("cosmic_luck", 5)],
                        &format!("Fallback feedback 4 for {theme}"),
                    ),
                ],
            },
        }
    }

    #[cfg(test)]
    pub fn catalog(&self, lang: Lang) -> &HashMap<String, Vec<GeneratedQuestion>> {
        match lang {
            Lang::En => &self.questions_en,
            Lang::Es => &self.questions_es,
        }
    }
}

#[async_trait]
impl QuestionGenerator for SimpleQuestionGenerator {
    fn name(&self) -> &'static str {
        "simple"
    }

    async fn generate(&self, theme: &str, lang: Lang) -> Result<GeneratedQuestion> {
        Ok(self.question_for(theme, lang))
    }
}

/// Maps a theme name to its counterpart in the other supported language.
fn translate_theme(theme: &str) -> Option<String> {
    for (es, en) in THEME_TRANSLATIONS {
        if *es == theme {
            return Some((*en).to_string());
        }
        if *en == theme {
            return Some((*es).to_string());
        }
    }
    None
}

fn opt(
    text: &str,
    emoji: &str,
    value: i32,
    effect: &[(&str, i32)],
    feedback: &str,
) -> GeneratedOption {
    GeneratedOption {
        text: text.to_string(),
        emoji: Some(emoji.to_string()),
        value,
        effect: effects(effect),
        feedback: Some(feedback.to_string()),
    }
}

fn entry(
    base_url: &str,
    question: &str,
    scenario: &str,
    image: &str,
    options: Vec<GeneratedOption>,
) -> GeneratedQuestion {
    GeneratedQuestion {
        question: question.to_string(),
        scenario_description: scenario.to_string(),
        context_image: format!(
            "{}/static/images/fallback/{image}",
            base_url.trim_end_matches('/')
        ),
        options,
    }
}

fn catalog_en(base_url: &str) -> HashMap<String, Vec<GeneratedQuestion>> {
    let mut catalog = HashMap::new();

    catalog.insert(
        "space travel".to_string(),
        vec![
            entry(
                base_url,
                "Your spaceship has detected an unregistered gravitational anomaly. What do you do?",
                "You're piloting an exploration vessel in an unknown sector when sensors detect a space-time distortion. No database has any record of this phenomenon and it appears to be completely new to science.",
                "wormhole.webp",
                vec![
                    opt("Launch an automated probe to investigate", "🛰️", 3,
                        &[("absurdity_resistance", 8), ("quantum_charisma", 5)],
                        "Cautious yet curious. Science appreciates your contribution."),
                    opt("Pilot directly toward the anomaly", "🚀", 4,
                        &[("time_warping", 12), ("cosmic_luck", 8)],
                        "Boldness can change entire universes."),
                    opt("Analyze from a safe distance", "🔭", 2,
                        &[("absurdity_resistance", 10), ("sarcasm_level", 6)],
                        "Wise observer of cosmic oddities."),
                    opt("Report and immediately move away", "📡", 1,
                        &[("absurdity_resistance", 12), ("quantum_charisma", 2)],
                        "Live to tell the tale. Interstellar prudence."),
                ],
            ),
            entry(
                base_url,
                "During your interstellar journey, you discover a planet with a primitive civilization. What do you decide?",
                "Your ship makes a stop at an oceanic planet where you detect an intelligent underwater species in its early technological stages. They have a rich culture but are unaware of the existence of extraterrestrial life.",
                "planet.webp",
                vec![
                    opt("Establish official first contact", "🤝", 4,
                        &[("quantum_charisma", 14), ("time_warping", 4)],
                        "Cosmic ambassador par excellence!"),
                    opt("Study them in secret", "🔍", 2,
                        &[("absurdity_resistance", 7), ("sarcasm_level", 8)],
                        "Certified space anthropologist."),
                    opt("Subtly leave them technology", "🎁", 3,
                        &[("cosmic_luck", 9), ("time_warping", 7)],
                        "A seed planted in the cosmos."),
                    opt("Avoid interference and continue your journey", "🚫", 1,
                        &[("absurdity_resistance", 10), ("sarcasm_level", 5)],
                        "The silent observer. The galaxy thanks you."),
                ],
            ),
        ],
    );

    catalog.insert(
        "alien encounter".to_string(),
        vec![
            entry(
                base_url,
                "An alien delegation offers advanced technology in exchange for human art. How do you respond?",
                "The Zephyrites, a highly developed alien species, have established contact and offer to share interstellar travel technology. They only ask to take with them a representative collection of human art, as they are unable to create art themselves.",
                "alien.webp",
                vec![
                    opt("Offer historical masterpieces", "🖼️", 3,
                        &[("quantum_charisma", 8), ("time_warping", 6)],
                        "Cultural ambassador of human heritage."),
                    opt("Create a new collection specifically for them", "🎨", 4,
                        &[("quantum_charisma", 12), ("absurdity_resistance", 9)],
                        "Inspired interdimensional innovator!"),
                    opt("Request more details about their technology", "🔬", 2,
                        &[("sarcasm_level", 9), ("absurdity_resistance", 7)],
                        "Cautious and methodical. The universe is complex."),
                    opt("Reject the exchange", "🚫", 1,
                        &[("time_warping", 3), ("absurdity_resistance", 12)],
                        "Cultural conservative. Value in what's yours."),
                ],
            ),
            entry(
                base_url,
                "You discover an alien hiding among the human population. What do you do?",
                "You've found evidence that a being from another world is living under a false human identity. They seem harmless and even contribute positively to society, but their presence violates established space protocols.",
                "alien.webp",
                vec![
                    opt("Confront them in private", "🤫", 3,
                        &[("quantum_charisma", 9), ("sarcasm_level", 6)],
                        "Discreet space diplomat."),
                    opt("Report them to the authorities", "👮", 1,
                        &[("absurdity_resistance", 10), ("cosmic_luck", 3)],
                        "Following rules in a chaotic universe."),
                    opt("Offer them help and protection", "🛡️", 4,
                        &[("quantum_charisma", 12), ("cosmic_luck", 8)],
                        "Universal cosmic friend."),
                    opt("Watch them without intervening", "👁️", 2,
                        &[("sarcasm_level", 8), ("time_warping", 7)],
                        "Cautious observer of the cosmic ballet."),
                ],
            ),
        ],
    );

    catalog.insert(
        "time paradox".to_string(),
        vec![
            entry(
                base_url,
                "You find a device that allows you to see 24 hours into the future. How do you use it?",
                "An eccentric scientist has left you a quantum device that shows exactly what will happen tomorrow. It works once a day and you cannot share what you see without triggering a paradox.",
                "time_machine.webp",
                vec![
                    opt("Use it to prevent accidents", "🚨", 3,
                        &[("cosmic_luck", 10), ("time_warping", 8)],
                        "Temporal savior. The universe notices your actions."),
                    opt("Use it for personal gain", "💰", 4,
                        &[("quantum_charisma", 6), ("time_warping", 12)],
                        "Quantum entrepreneur. Time is money."),
                    opt("Observe without intervening", "👁️", 2,
                        &[("absurdity_resistance", 9), ("sarcasm_level", 7)],
                        "Witness to the temporal fabric."),
                    opt("Destroy the device", "🔨", 1,
                        &[("absurdity_resistance", 12), ("quantum_charisma", 3)],
                        "Natural guardian of temporal flow."),
                ],
            ),
            entry(
                base_url,
                "You find yourself trapped in a time loop. How do you react?",
                "You're living the same day over and over again. No one else seems to be aware of the phenomenon, and all your actions reset at the end of the day. You've already repeated this day 42 times.",
                "time_machine.webp",
                vec![
                    opt("Learn a new skill every day", "🧠", 3,
                        &[("quantum_charisma", 8), ("absurdity_resistance", 10)],
                        "Master of infinite time."),
                    opt("Look for patterns that break the loop", "🔍", 4,
                        &[("time_warping", 14), ("sarcasm_level", 6)],
                        "Extraordinary quantum detective."),
                    opt("Experiment without worrying about consequences", "🎭", 2,
                        &[("sarcasm_level", 9), ("cosmic_luck", 7)],
                        "Controlled chaos. Experiment and adapt."),
                    opt("Maintain a strict routine", "📋", 1,
                        &[("absurdity_resistance", 12), ("time_warping", 4)],
                        "Order in temporal chaos."),
                ],
            ),
        ],
    );

    catalog.insert(
        "space colonization".to_string(),
        vec![
            entry(
                base_url,
                "You lead a colonization mission and discover the planet already has microscopic life. What decision do you make?",
                "Your colony is ready to settle on a seemingly habitable planet, but analyses reveal native microorganisms. Relocating the colony would cost lives and resources, but continuing could affect the extraterrestrial ecosystem.",
                "spaceship.webp",
                vec![
                    opt("Establish controlled coexistence zones", "🔄", 3,
                        &[("quantum_charisma", 9), ("absurdity_resistance", 8)],
                        "Interplanetary microbial diplomat."),
                    opt("Relocate the colony to another planet", "🚀", 1,
                        &[("absurdity_resistance", 12), ("cosmic_luck", 5)],
                        "Primordial protector. Life is sacred."),
                    opt("Genetically modify the colonists to adapt", "🧬", 4,
                        &[("time_warping", 10), ("quantum_charisma", 8)],
                        "Cosmic evolutionary revolutionary."),
                    opt("Establish the colony in orbit", "🛰️", 2,
                        &[("sarcasm_level", 7), ("time_warping", 6)],
                        "Clever compromise between worlds."),
                ],
            ),
            entry(
                base_url,
                "The space colony you lead faces limited resources. How do you manage them?",
                "Your settlement on the outer rim has supplies for six months. The resupply ship is delayed and there's no guarantee when it will arrive. Tensions are rising among the 500 colonists.",
                "space.webp",
                vec![
                    opt("Implement strict rationing", "📊", 2,
                        &[("absurdity_resistance", 9), ("sarcasm_level", 5)],
                        "Pragmatic space administrator."),
                    opt("Send a mission to find resources", "🔍", 3,
                        &[("cosmic_luck", 8), ("quantum_charisma", 7)],
                        "Adaptable explorer. Space provides."),
                    opt("Develop self-sufficiency technology", "🌱", 4,
                        &[("time_warping", 9), ("quantum_charisma", 10)],
                        "Visionary stellar innovator."),
                    opt("Hibernate part of the population", "❄️", 1,
                        &[("absurdity_resistance", 10), ("cosmic_luck", 3)],
                        "Glacial pragmatist. Difficult decisions define leaders."),
                ],
            ),
        ],
    );

    catalog
}

fn catalog_es(base_url: &str) -> HashMap<String, Vec<GeneratedQuestion>> {
    let mut catalog = HashMap::new();

    catalog.insert(
        "viaje espacial".to_string(),
        vec![
            entry(
                base_url,
                "Tu nave espacial ha detectado una anomalía gravitacional no registrada. ¿Qué haces?",
                "Estás pilotando una nave de exploración en un sector desconocido cuando los sensores detectan una distorsión espacio-temporal. Ninguna base de datos tiene registro de este fenómeno y parece ser completamente nuevo para la ciencia.",
                "wormhole.webp",
                vec![
                    opt("Lanzar una sonda automatizada para investigar", "🛰️", 3,
                        &[("absurdity_resistance", 8), ("quantum_charisma", 5)],
                        "Prudente pero curioso. La ciencia agradece tu contribución."),
                    opt("Pilotear directamente hacia la anomalía", "🚀", 4,
                        &[("time_warping", 12), ("cosmic_luck", 8)],
                        "La audacia puede cambiar universos enteros."),
                    opt("Analizar desde distancia segura", "🔭", 2,
                        &[("absurdity_resistance", 10), ("sarcasm_level", 6)],
                        "Sabio observador de las rarezas cósmicas."),
                    opt("Informar y alejarse inmediatamente", "📡", 1,
                        &[("absurdity_resistance", 12), ("quantum_charisma", 2)],
                        "Vivir para contarlo. Prudencia interestelar."),
                ],
            ),
            entry(
                base_url,
                "Durante tu viaje interestelar, descubres un planeta con una civilización primitiva. ¿Qué decides?",
                "Tu nave realiza una parada en un planeta oceánico donde detectas una especie inteligente subacuática en sus primeras etapas tecnológicas. Tienen una cultura rica pero desconocen la existencia de vida extraterrestre.",
                "planet.webp",
                vec![
                    opt("Establecer primer contacto oficial", "🤝", 4,
                        &[("quantum_charisma", 14), ("time_warping", 4)],
                        "¡Embajador cósmico por excelencia!"),
                    opt("Estudiarlos en secreto", "🔍", 2,
                        &[("absurdity_resistance", 7), ("sarcasm_level", 8)],
                        "Antropólogo espacial certificado."),
                    opt("Dejarles sutilmente tecnología", "🎁", 3,
                        &[("cosmic_luck", 9), ("time_warping", 7)],
                        "Una semilla plantada en el cosmos."),
                    opt("Evitar interferencia y seguir tu viaje", "🚫", 1,
                        &[("absurdity_resistance", 10), ("sarcasm_level", 5)],
                        "El observador silencioso. La galaxia lo agradece."),
                ],
            ),
        ],
    );

    catalog.insert(
        "encuentro alienígena".to_string(),
        vec![
            entry(
                base_url,
                "Una delegación alienígena ofrece tecnología avanzada a cambio de arte humano. ¿Cómo respondes?",
                "Los Zephyritas, una especie alienígena altamente desarrollada, han establecido contacto y ofrecen compartir tecnología de viaje interestelar. Solo piden llevar consigo una colección representativa de arte humano, ya que son incapaces de crear arte propio.",
                "alien.webp",
                vec![
                    opt("Ofrecer obras maestras históricas", "🖼️", 3,
                        &[("quantum_charisma", 8), ("time_warping", 6)],
                        "Embajador cultural del patrimonio humano."),
                    opt("Crear nueva colección específica para ellos", "🎨", 4,
                        &[("quantum_charisma", 12), ("absurdity_resistance", 9)],
                        "¡Inspirado innovador interdimensional!"),
                    opt("Solicitar más detalles sobre su tecnología", "🔬", 2,
                        &[("sarcasm_level", 9), ("absurdity_resistance", 7)],
                        "Cauteloso y metódico. El universo es complejo."),
                    opt("Rechazar el intercambio", "🚫", 1,
                        &[("time_warping", 3), ("absurdity_resistance", 12)],
                        "Conservador cultural. Valor en lo propio."),
                ],
            ),
            entry(
                base_url,
                "Descubres que un alienígena se oculta entre la población humana. ¿Qué haces?",
                "Has encontrado pruebas de que un ser de otro mundo vive bajo una identidad humana falsa. Parece inofensivo e incluso contribuye positivamente a la sociedad, pero su presencia viola los protocolos espaciales establecidos.",
                "alien.webp",
                vec![
                    opt("Confrontarlo en privado", "🤫", 3,
                        &[("quantum_charisma", 9), ("sarcasm_level", 6)],
                        "Diplomático espacial discreto."),
                    opt("Reportarlo a las autoridades", "👮", 1,
                        &[("absurdity_resistance", 10), ("cosmic_luck", 3)],
                        "Seguir las reglas en un universo caótico."),
                    opt("Ofrecerle ayuda y protección", "🛡️", 4,
                        &[("quantum_charisma", 12), ("cosmic_luck", 8)],
                        "Amigo cósmico universal."),
                    opt("Vigilarlo sin intervenir", "👁️", 2,
                        &[("sarcasm_level", 8), ("time_warping", 7)],
                        "Observador cauteloso del ballet cósmico."),
                ],
            ),
        ],
    );

    catalog.insert(
        "paradoja temporal".to_string(),
        vec![
            entry(
                base_url,
                "Encuentras un dispositivo que te permite ver 24 horas en el futuro. ¿Cómo lo usas?",
                "Un científico excéntrico te ha dejado un dispositivo cuántico que muestra exactamente lo que sucederá mañana. Funciona una vez al día y no puedes compartir lo que ves sin desencadenar una paradoja.",
                "time_machine.webp",
                vec![
                    opt("Usarlo para prevenir accidentes", "🚨", 3,
                        &[("cosmic_luck", 10), ("time_warping", 8)],
                        "Salvador temporal. El universo nota tus acciones."),
                    opt("Aprovecharlo para beneficio personal", "💰", 4,
                        &[("quantum_charisma", 6), ("time_warping", 12)],
                        "Empresario cuántico. Tiempo es dinero."),
                    opt("Observar sin intervenir", "👁️", 2,
                        &[("absurdity_resistance", 9), ("sarcasm_level", 7)],
                        "Testigo del tejido temporal."),
                    opt("Destruir el dispositivo", "🔨", 1,
                        &[("absurdity_resistance", 12), ("quantum_charisma", 3)],
                        "Guardián natural del flujo temporal."),
                ],
            ),
            entry(
                base_url,
                "Te encuentras atrapado en un bucle temporal. ¿Cómo reaccionas?",
                "Estás viviendo el mismo día una y otra vez. Nadie más parece ser consciente del fenómeno, y todas tus acciones se reinician al final del día. Ya has repetido este día 42 veces.",
                "time_machine.webp",
                vec![
                    opt("Aprender una habilidad nueva cada día", "🧠", 3,
                        &[("quantum_charisma", 8), ("absurdity_resistance", 10)],
                        "Maestro del tiempo infinito."),
                    opt("Buscar patrones que rompan el bucle", "🔍", 4,
                        &[("time_warping", 14), ("sarcasm_level", 6)],
                        "Detective cuántico extraordinario."),
                    opt("Experimentar sin preocuparte por consecuencias", "🎭", 2,
                        &[("sarcasm_level", 9), ("cosmic_luck", 7)],
                        "Caos controlado. Experimenta y adapta."),
                    opt("Mantener una rutina estricta", "📋", 1,
                        &[("absurdity_resistance", 12), ("time_warping", 4)],
                        "Orden en el caos temporal."),
                ],
            ),
        ],
    );

    catalog.insert(
        "colonización espacial".to_string(),
        vec![
            entry(
                base_url,
                "Lideras una misión de colonización y descubres que el planeta ya tiene vida microscópica. ¿Qué decisión tomas?",
                "Tu colonia está lista para establecerse en un planeta aparentemente habitable, pero los análisis revelan microorganismos nativos. Reubicar la colonia costaría vidas y recursos, pero continuar podría afectar el ecosistema extraterrestre.",
                "spaceship.webp",
                vec![
                    opt("Establecer zonas de coexistencia controlada", "🔄", 3,
                        &[("quantum_charisma", 9), ("absurdity_resistance", 8)],
                        "Diplomático microbiano interplanetario."),
                    opt("Reubicar la colonia a otro planeta", "🚀", 1,
                        &[("absurdity_resistance", 12), ("cosmic_luck", 5)],
                        "Protector primordial. La vida es sagrada."),
                    opt("Modificar genéticamente a los colonos para adaptarse", "🧬", 4,
                        &[("time_warping", 10), ("quantum_charisma", 8)],
                        "Revolucionario evolucionario cósmico."),
                    opt("Establecer la colonia en órbita", "🛰️", 2,
                        &[("sarcasm_level", 7), ("time_warping", 6)],
                        "Compromiso astuto entre mundos."),
                ],
            ),
            entry(
                base_url,
                "La colonia espacial que lideras enfrenta recursos limitados. ¿Cómo los administras?",
                "Tu asentamiento en el borde exterior tiene suministros para seis meses. La nave de reabastecimiento se ha retrasado y no hay garantía de cuándo llegará. Las tensiones aumentan entre los 500 colonos.",
                "space.webp",
                vec![
                    opt("Implementar racionamiento estricto", "📊", 2,
                        &[("absurdity_resistance", 9), ("sarcasm_level", 5)],
                        "Administrador espacial pragmático."),
                    opt("Enviar misión para encontrar recursos", "🔍", 3,
                        &[("cosmic_luck", 8), ("quantum_charisma", 7)],
                        "Explorador adaptable. El espacio provee."),
                    opt("Desarrollar tecnología de autosuficiencia", "🌱", 4,
                        &[("time_warping", 9), ("quantum_charisma", 10)],
                        "Innovador estelar visionario."),
                    opt("Hibernar a parte de la población", "❄️", 1,
                        &[("absurdity_resistance", 10), ("cosmic_luck", 3)],
                        "Pragmático glacial. Las decisiones difíciles definen líderes."),
                ],
            ),
        ],
    );

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::question_service::themes_for;

    const BASE: &str = "http://localhost:8000";

    #[test]
    fn curated_values_are_a_permutation_of_1_to_4() {
        let generator = SimpleQuestionGenerator::with_seed(BASE, 7);
        for lang in [Lang::En, Lang::Es] {
            for theme in themes_for(lang) {
                let question = generator.question_for(theme, lang);
                assert_eq!(question.options.len(), 4, "theme {theme}");
                let mut values: Vec<i32> =
                    question.options.iter().map(|o| o.value).collect();
                values.sort_unstable();
                assert_eq!(values, vec![1, 2, 3, 4], "theme {theme}");
            }
        }
    }

    #[test]
    fn theme_in_other_language_is_translated_before_lookup() {
        let generator = SimpleQuestionGenerator::with_seed(BASE, 3);
        let question = generator.question_for("viaje espacial", Lang::En);
        let catalog = generator.catalog(Lang::En);
        assert!(catalog["space travel"].contains(&question));
    }

    #[test]
    fn spanish_catalog_serves_spanish_themes() {
        let generator = SimpleQuestionGenerator::with_seed(BASE, 11);
        let question = generator.question_for("paradoja temporal", Lang::Es);
        let catalog = generator.catalog(Lang::Es);
        assert!(catalog["paradoja temporal"].contains(&question));
    }

    #[test]
    fn unknown_theme_gets_deterministic_template() {
        let generator = SimpleQuestionGenerator::new(BASE);
        let first = generator.question_for("bureaucratic nebula", Lang::En);
        let second = generator.question_for("bureaucratic nebula", Lang::En);
        assert_eq!(first, second);
        assert_eq!(first.question, "Fallback question about bureaucratic nebula");
        assert_eq!(first.options.len(), 4);
        for option in &first.options {
            assert_eq!(option.effect.len(), 1);
        }
        let values: Vec<i32> = first.options.iter().map(|o| o.value).collect();
        assert_eq!(values, vec![4, 3, 2, 1]);
    }

    #[test]
    fn seeded_generator_is_reproducible() {
        let a = SimpleQuestionGenerator::with_seed(BASE, 42);
        let b = SimpleQuestionGenerator::with_seed(BASE, 42);
        for _ in 0..4 {
            assert_eq!(
                a.question_for("space travel", Lang::En),
                b.question_for("space travel", Lang::En)
            );
        }
    }
}
