//! Static curriculum data: syllabus objectives, categorized vocabulary,
//! reading passages and writing prompts for 7° básico English.

/// One bilingual vocabulary entry. A monolingual deck is the degenerate
/// case `en == es`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VocabPair {
    pub en: &'static str,
    pub es: &'static str,
}

const fn p(en: &'static str, es: &'static str) -> VocabPair {
    VocabPair { en, es }
}

#[derive(Clone, Copy, PartialEq)]
pub struct Objective {
    pub id: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub indicators: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VocabCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub pairs: &'static [VocabPair],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReadingQuestion {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub answer: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReadingPassage {
    pub id: u32,
    pub title: &'static str,
    pub text: &'static str,
    pub questions: &'static [ReadingQuestion],
}

#[derive(Clone, Copy, PartialEq)]
pub struct WritingPrompt {
    pub id: u32,
    pub text: &'static str,
    pub oa: &'static str,
}

pub const OBJECTIVES: &[Objective] = &[
    Objective {
        id: "OA9",
        title: "Comprensión de lectura (OA9)",
        desc: "Demostrar comprensión de ideas generales e información explícita en textos simples y auténticos (experiencias personales, temas de otras asignaturas, actualidad, otras culturas).",
        indicators: &[
            "Identifican la idea general.",
            "Identifican información explícita.",
            "Responden preguntas sobre información general y explícita.",
            "Plantean una postura frente a información del texto.",
        ],
    },
    Objective {
        id: "OA10",
        title: "Comprensión de textos no literarios (OA10)",
        desc: "Demostrar comprensión de descripciones, instrucciones, avisos, emails, diálogos, páginas web, biografías, gráficos.",
        indicators: &[
            "Identifican ideas generales y detalles.",
            "Distinguen hecho/opinión y causa/efecto.",
            "Reconocen conectores (first, next, finally, because, while, before/after, too).",
            "Identifican vocabulario temático y expresiones frecuentes.",
        ],
    },
    Objective {
        id: "OA13",
        title: "Expresión escrita creativa (OA13)",
        desc: "Escribir historias e información relevante (experiencias personales, contenidos interdisciplinarios, problemas globales, cultura de otros países, textos leídos).",
        indicators: &[
            "Describen información relevante.",
            "Redactan opiniones con apoyo de imágenes.",
            "Comparten información sobre temas del año.",
        ],
    },
    Objective {
        id: "OA16",
        title: "Uso del lenguaje en textos escritos (OA16)",
        desc: "Funciones: cantidades (there is/are, many/much), describir objetos/deportes, actividades, obligación/prohibición (must/mustn’t), claridad con expresiones comunes, tiempo/modo (yesterday, quietly), causa/efecto (if), preguntas en presente/pasado, acciones simultáneas/interrumpidas (Past Continuous), conectores (first/next/finally; before/after).",
        indicators: &[
            "Completan ideas con expresiones comunes (make friends, see you soon, take a break).",
            "Describen rutinas, hobbies y acciones realizadas.",
            "Describen acciones simultáneas o interrumpidas en pasado.",
            "Responden preguntas en presente y pasado justificando opiniones.",
        ],
    },
];

pub const VOCABULARY: &[VocabCategory] = &[
    VocabCategory {
        id: "emotions",
        name: "emotions",
        pairs: &[
            p("happy", "feliz"),
            p("angry", "enojado/a"),
            p("sad", "triste"),
            p("tired", "cansado/a"),
            p("excited", "emocionado/a"),
            p("nervous", "nervioso/a"),
            p("nice", "amable"),
            p("annoyed", "molesto/a"),
            p("bored", "aburrido/a"),
            p("upset", "disgustado/a"),
            p("glad", "contento/a"),
            p("kind", "bondadoso/a"),
            p("friendly", "amistoso/a"),
        ],
    },
    VocabCategory {
        id: "activities",
        name: "activities",
        pairs: &[
            p("play sports", "hacer deporte"),
            p("go out", "salir"),
            p("surf the net", "navegar por internet"),
            p("play console games", "jugar en consola"),
            p("chat on the phone", "hablar por teléfono"),
            p("hang out", "pasar el rato"),
            p("play football", "jugar fútbol"),
            p("do karate", "hacer kárate"),
            p("do athletics", "hacer atletismo"),
            p("go swimming", "ir a nadar"),
            p("go skating", "ir a patinar"),
        ],
    },
    VocabCategory {
        id: "expressions",
        name: "expressions",
        pairs: &[
            p("afraid of", "tener miedo de"),
            p("make friends", "hacer amigos"),
            p("make plans", "hacer planes"),
            p("make a mistake", "cometer un error"),
            p("give advice", "dar consejos"),
            p("I'm fed up with", "estoy harto de"),
            p("I'm sorry to hear that", "siento escuchar eso"),
            p("see you later", "hasta luego"),
            p("see you soon", "nos vemos pronto"),
            p("I feel … because …", "me siento … porque …"),
        ],
    },
    VocabCategory {
        id: "food",
        name: "food",
        pairs: &[
            p("apple", "manzana"),
            p("orange", "naranja"),
            p("banana", "plátano"),
            p("lemon", "limón"),
            p("grape", "uva"),
            p("tomato", "tomate"),
            p("potato", "papa"),
            p("lettuce", "lechuga"),
            p("cabbage", "repollo"),
            p("carrot", "zanahoria"),
            p("meat", "carne"),
            p("chicken", "pollo"),
            p("egg", "huevo"),
            p("pasta", "pasta"),
            p("pizza", "pizza"),
            p("rice", "arroz"),
            p("salad", "ensalada"),
            p("sandwich", "sándwich"),
            p("biscuit", "galleta"),
            p("bread", "pan"),
            p("cake", "torta"),
            p("butter", "mantequilla"),
            p("cheese", "queso"),
            p("chocolate", "chocolate"),
            p("ice cream", "helado"),
            p("coffee", "café"),
            p("juice", "jugo"),
            p("milk", "leche"),
            p("water", "agua"),
            p("tea", "té"),
        ],
    },
    VocabCategory {
        id: "sports",
        name: "sports",
        pairs: &[
            p("football", "fútbol"),
            p("tennis", "tenis"),
            p("basketball", "básquetbol"),
            p("volleyball", "vóleibol"),
            p("running", "correr"),
            p("climbing", "escalada"),
            p("skating", "patinaje"),
            p("aerobics", "aeróbica"),
            p("karate", "kárate"),
            p("athletics", "atletismo"),
            p("gymnastics", "gimnasia"),
            p("skateboarding", "andar en skate"),
        ],
    },
    VocabCategory {
        id: "equipment",
        name: "equipment",
        pairs: &[
            p("sneakers", "zapatillas"),
            p("ball", "pelota"),
            p("bat", "bate"),
            p("stick", "palo"),
            p("helmet", "casco"),
        ],
    },
    VocabCategory {
        id: "places",
        name: "places",
        pairs: &[
            p("court", "cancha"),
            p("pitch", "campo"),
            p("stadium", "estadio"),
            p("track", "pista"),
            p("pool", "piscina"),
        ],
    },
    VocabCategory {
        id: "environment",
        name: "environment",
        pairs: &[
            p("environment", "medio ambiente"),
            p("plastic", "plástico"),
            p("glass", "vidrio"),
            p("metal", "metal"),
            p("second hand", "de segunda mano"),
            p("factory", "fábrica"),
            p("outdoors", "al aire libre"),
            p("countryside", "campo"),
            p("wildfire", "incendio forestal"),
            p("earthquake", "terremoto"),
            p("forest", "bosque"),
            p("lake", "lago"),
            p("sea", "mar"),
            p("pollution", "contaminación"),
            p("temperature", "temperatura"),
            p("smog", "smog"),
            p("waste", "residuos"),
            p("cut down", "talar"),
            p("destroy", "destruir"),
            p("contaminate", "contaminar"),
            p("natural resources", "recursos naturales"),
            p("protect", "proteger"),
            p("save", "ahorrar/salvar"),
            p("pollute", "contaminar"),
            p("global problems", "problemas globales"),
            p("garbage", "basura"),
            p("plant trees", "plantar árboles"),
            p("trash", "basura"),
            p("litter", "arrojar basura"),
        ],
    },
];

/// All vocabulary pairs across every category, in declaration order.
pub fn all_pairs() -> Vec<VocabPair> {
    VOCABULARY
        .iter()
        .flat_map(|cat| cat.pairs.iter().copied())
        .collect()
}

pub const READING_PASSAGES: &[ReadingPassage] = &[
    ReadingPassage {
        id: 1,
        title: "A School Recycling Day",
        text: "Last Friday, our class organized a recycling day. First, we collected plastic bottles and paper from every room. Next, we made posters to explain why recycling matters. Finally, we visited the science lab to weigh all the materials. We saved 20 kilograms of paper!",
        questions: &[
            ReadingQuestion {
                prompt: "What is the main idea of the text?",
                options: &[
                    "Students organized a recycling activity at school.",
                    "Students visited a museum.",
                    "Students played sports all day.",
                    "Students had a math competition.",
                ],
                answer: 0,
            },
            ReadingQuestion {
                prompt: "Which happened SECOND?",
                options: &[
                    "They visited the science lab.",
                    "They collected bottles and paper.",
                    "They made posters.",
                    "They weighed 20 kilograms of plastic.",
                ],
                answer: 2,
            },
            ReadingQuestion {
                prompt: "How much paper did they save?",
                options: &["20 kilograms", "20 grams", "200 kilograms", "2 kilograms"],
                answer: 0,
            },
        ],
    },
    ReadingPassage {
        id: 2,
        title: "Weekend Sports Club",
        text: "Every Saturday morning, I go to the sports club with my friends. I usually play basketball, but last weekend I tried climbing. While I was climbing, my sister was running on the track. It was fun but a little scary!",
        questions: &[
            ReadingQuestion {
                prompt: "What sport did the writer try last weekend?",
                options: &["Running", "Climbing", "Basketball", "Swimming"],
                answer: 1,
            },
            ReadingQuestion {
                prompt: "What was the sister doing while the writer was climbing?",
                options: &["Running", "Skating", "Basketball", "Karate"],
                answer: 0,
            },
            ReadingQuestion {
                prompt: "How did the writer feel about climbing?",
                options: &["Bored", "Annoyed", "Scared but fun", "Angry"],
                answer: 2,
            },
        ],
    },
    ReadingPassage {
        id: 3,
        title: "A Healthy Picnic",
        text: "My family had a picnic in the countryside yesterday. We ate salad, fruit, and sandwiches. My mom said we mustn't leave any litter, so we took our garbage home. Before we left, we planted two trees.",
        questions: &[
            ReadingQuestion {
                prompt: "Where did the family have a picnic?",
                options: &["At school", "In the countryside", "At a stadium", "At a mall"],
                answer: 1,
            },
            ReadingQuestion {
                prompt: "What MUSTN'T they do?",
                options: &["Plant trees", "Eat sandwiches", "Leave litter", "Drink water"],
                answer: 2,
            },
            ReadingQuestion {
                prompt: "What did they do before they left?",
                options: &[
                    "Played basketball",
                    "Planted two trees",
                    "Went swimming",
                    "Made posters",
                ],
                answer: 1,
            },
        ],
    },
];

pub const WRITING_PROMPTS: &[WritingPrompt] = &[
    WritingPrompt {
        id: 1,
        text: "Write about a personal experience where you helped the environment. Use first/next/finally and at least 80 words.",
        oa: "OA13, OA16 (conectores, pasado)",
    },
    WritingPrompt {
        id: 2,
        text: "Describe your favorite sport or hobby. Include equipment, place, and how often you practice.",
        oa: "OA16 (rutinas, deportes, frecuencia)",
    },
    WritingPrompt {
        id: 3,
        text: "Give advice to a friend who feels nervous before a test. Use expressions (give advice, I'm sorry to hear that, see you soon).",
        oa: "OA16 (expresiones comunes)",
    },
    WritingPrompt {
        id: 4,
        text: "Explain a simple cause-and-effect situation (e.g., If you heat ice cream, it melts). Give two more examples.",
        oa: "OA16 (if, causa-efecto)",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_answers_index_into_options() {
        for passage in READING_PASSAGES {
            for q in passage.questions {
                assert!(q.options.len() >= 2, "{}: too few options", passage.title);
                assert!(q.answer < q.options.len(), "{}: bad answer index", passage.title);
            }
        }
    }

    #[test]
    fn passage_ids_are_unique() {
        let mut ids: Vec<u32> = READING_PASSAGES.iter().map(|passage| passage.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), READING_PASSAGES.len());
    }

    #[test]
    fn pool_is_big_enough_for_four_option_questions() {
        assert!(all_pairs().len() >= 12);
    }
}
