// Topic lexicon: the static keyword table behind the impact classifier.
//
// Eighteen predefined topics, each with an internal key, a display name, and
// an ordered list of Portuguese keywords and phrases. Keywords are stored
// lowercased so both the token check and the substring check compare
// case-insensitively.
//
// A lexicon can also be loaded from a JSON file (ESCALA_LEXICON_PATH) with
// the same shape as `TopicSpec`. Every topic must keep at least one keyword.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One row of the built-in topic table.
pub struct TopicDef {
    pub key: &'static str,
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

/// The built-in topics, in display-tie-break order.
pub const BUILTIN_TOPICS: &[TopicDef] = &[
    TopicDef {
        key: "saude_mental",
        name: "Saúde Mental",
        keywords: &[
            "ansiedade", "depressão", "burnout", "estresse", "mental", "psicológico",
            "psicológica", "emocional", "psicologicamente", "emocionalmente", "ansioso",
            "depressivo", "estressado", "estressante", "psiquiátrico", "psiquiátrica",
            "psicológicos", "saúde mental", "bem-estar mental", "bem estar mental",
            "transtorno", "transtornos", "esgotamento", "esgotado", "esgotada", "nervoso",
            "nervosa", "irritado", "irritada", "irritação", "nervosismo", "pânico",
            "síndrome do pânico", "tristeza", "triste", "desânimo", "desanimado",
            "desanimada", "frustração", "frustrado", "frustrada", "angústia", "angustiado",
            "angustiada", "sofrimento", "sofrendo", "sofro", "psicológicamente",
            "mentalmente", "emocionalmente", "paciência", "sem paciência", "irritabilidade",
            "instabilidade", "instável", "humor", "alteração de humor", "crise", "crises",
            "desespero", "desesperado", "desesperada", "medicamento", "antidepressivo",
            "terapia",
        ],
    },
    TopicDef {
        key: "saude_fisica",
        name: "Saúde Física",
        keywords: &[
            "dor", "dores", "crônica", "crônicas", "coluna", "joelho", "joelhos", "pé", "pés",
            "varizes", "variz", "tendinite", "gastrite", "infecção", "infecções", "urinária",
            "urinárias", "pressão alta", "hipertensão", "circulação", "LER", "DORT", "cansaço",
            "fadiga", "exaustão", "físico", "física", "saúde física", "problema de saúde",
            "doença", "doenças", "problemas físicos", "machucado", "machucada", "lesão",
            "lesões", "desgaste", "articulação", "articulações", "músculo", "músculos",
            "postura", "ergonomia",
        ],
    },
    TopicDef {
        key: "familia",
        name: "Família",
        keywords: &[
            "família", "filho", "filhos", "filha", "filhas", "pai", "pais", "mãe", "mães",
            "cônjuge", "marido", "esposa", "esposo", "parente", "parentes", "famíliares",
            "evento familiar", "aniversário", "reunião escolar", "data comemorativa", "festa",
            "natal", "ano novo", "tempo com família", "convívio familiar", "ausência",
            "ausente", "distanciamento", "distante", "culpa", "culpado", "culpada", "presença",
            "acompanhar", "criação dos filhos", "educação dos filhos", "perder momentos",
            "momentos em família",
        ],
    },
    TopicDef {
        key: "vida_social",
        name: "Vida Social",
        keywords: &[
            "amigo", "amigos", "amiga", "amigas", "social", "socialização", "isolamento",
            "isolado", "isolada", "sozinho", "sozinha", "solidão", "perda de amigos",
            "afastamento", "afastado", "afastada", "convívio social", "sair", "encontro",
            "eventos sociais", "festa com amigos", "relação social", "relações sociais",
            "falta de tempo para amigos", "sem tempo para socializar", "recluso", "reclusa",
        ],
    },
    TopicDef {
        key: "autocuidado_e_lazer",
        name: "Autocuidado e Lazer",
        keywords: &[
            "lazer", "hobby", "hobbies", "atividade física", "exercício", "exercícios",
            "academia", "caminhada", "esporte", "esportes", "viagem", "viajar", "férias",
            "descanso", "relaxamento", "relaxar", "diversão", "divertir", "cinema", "teatro",
            "museu", "cultura", "cultural", "passatempo", "prazer", "bem-estar", "bem estar",
            "autocuidado", "cuidado pessoal", "saúde pessoal", "tempo para mim", "tempo livre",
            "folga para lazer", "abandonar hobbies", "sem tempo para lazer",
        ],
    },
    TopicDef {
        key: "jornada_e_carga_horaria",
        name: "Jornada e Carga Horária",
        keywords: &[
            "jornada", "carga horária", "folga", "folgas", "descanso insuficiente",
            "hora extra", "horas extras", "trabalhar demais", "escala", "escala 6x1",
            "excesso de trabalho", "trabalho intenso", "exhaustivo", "exaustivo", "exaustiva",
            "cansativo", "cansativa", "cansaço", "fadiga", "esgotamento",
            "viver para trabalhar", "sem tempo para descansar", "trabalhar muito",
            "rotina pesada", "rotina exaustiva", "horário longo", "turno longo",
        ],
    },
    TopicDef {
        key: "ambiente_de_trabalho",
        name: "Ambiente de Trabalho",
        keywords: &[
            "assédio", "assédio moral", "pressão", "meta", "metas", "liderança", "líder",
            "chefe", "tóxico", "tóxica", "ambiente hostil", "hostilidade", "desrespeito",
            "falta de reconhecimento", "rotatividade", "punição", "punições", "injustiça",
            "injusto", "injusta", "cobrança", "cobranças", "intimidação", "humilhação",
            "desvalorização", "desvalorizado", "desvalorizada", "clima ruim", "ambiente ruim",
        ],
    },
    TopicDef {
        key: "remuneracao_e_direitos",
        name: "Remuneração e Direitos",
        keywords: &[
            "salário", "salários", "baixo", "baixa", "remuneração", "pagamento", "benefício",
            "benefícios", "falta de benefícios", "feriado", "banco de horas", "direito",
            "direitos", "trabalhista", "trabalhistas", "atestado", "folga remunerada",
            "insuficiente", "salário insuficiente", "exploração", "explorado", "explorada",
            "sem direitos", "injustiça trabalhista",
        ],
    },
    TopicDef {
        key: "tarefas_domesticas",
        name: "Tarefas Domésticas",
        keywords: &[
            "tarefa", "tarefas", "doméstica", "domésticas", "casa", "limpeza", "limpar",
            "lavar", "roupa", "roupas", "cozinhar", "cozinha", "afazeres",
            "afazeres domésticos", "organização", "organizar", "acúmulo", "acumular",
            "folga para tarefas", "sem tempo para casa", "casa bagunçada",
            "manutenção da casa", "cuidado com a casa",
        ],
    },
    TopicDef {
        key: "logistica_e_transportes",
        name: "Logística e Transportes",
        keywords: &[
            "transporte", "transportes", "deslocamento", "trajeto", "viagem", "ônibus",
            "metrô", "trânsito", "tempo de deslocamento", "longo trajeto",
            "cansaço no transporte", "tempo perdido", "distância", "longe", "chegar cansado",
            "chegar cansada", "transporte público", "dependência de transporte",
        ],
    },
    TopicDef {
        key: "alimentacao_e_sono",
        name: "Alimentação e Sono",
        keywords: &[
            "alimentação", "comida", "refeição", "refeições", "irregular", "ultraprocessado",
            "ultraprocessados", "comer mal", "pular refeição", "pular refeições", "fast food",
            "sono", "insônia", "dormir", "sono irregular", "sono insuficiente",
            "noite mal dormida", "acordar cansado", "acordar cansada", "falta de sono",
            "má alimentação", "problemas digestivos", "gastrite",
        ],
    },
    TopicDef {
        key: "dificuldade_em_estudar",
        name: "Dificuldade em Estudar",
        keywords: &[
            "estudo", "estudos", "estudar", "faculdade", "curso", "cursos", "escola",
            "educação", "abandono", "abandonar", "trancar", "desistir",
            "sem tempo para estudar", "falta de tempo para estudo", "cansaço para estudar",
            "conciliar estudo", "dificuldade em estudar", "atraso nos estudos",
            "parar de estudar",
        ],
    },
    TopicDef {
        key: "profissionalizacao",
        name: "Profissionalização",
        keywords: &[
            "profissionalização", "qualificação", "carreira", "mudar de carreira",
            "progressão", "crescimento profissional", "capacitação",
            "curso profissionalizante", "estagnação", "estagnado", "estagnada",
            "sem tempo para qualificação", "falta de oportunidade", "preso no emprego",
            "preso na escala", "melhorar de vida",
        ],
    },
    TopicDef {
        key: "desigualdade_de_genero",
        name: "Desigualdade de Gênero",
        keywords: &[
            "gênero", "mulher", "mulheres", "mãe", "mães", "maternidade", "dupla jornada",
            "jornada dupla", "carga dupla", "mãe solo", "mãe solteira", "cuidado com filhos",
            "responsabilidade", "sobrecarga", "desigualdade", "machismo", "sexismo",
            "discriminação", "papel de gênero", "tarefas femininas", "carga doméstica",
        ],
    },
    TopicDef {
        key: "precarizacao_financeira",
        name: "Precarização Financeira",
        keywords: &[
            "financeiro", "financeira", "dinheiro", "dívida", "dívidas", "conta", "contas",
            "pagar", "salário insuficiente", "falta de dinheiro", "pobreza", "precarização",
            "precariedade", "gastar", "despesa", "despesas", "economia", "crise financeira",
            "sem condições", "falta de recursos", "endividado", "endividada",
        ],
    },
    TopicDef {
        key: "acesso_a_servicos_publicos",
        name: "Acesso a Serviços Públicos",
        keywords: &[
            "serviço", "serviços", "público", "públicos", "banco", "bancos", "burocracia",
            "burocrático", "SUS", "consulta", "exame", "vacina", "documento", "documentos",
            "resolver", "pendência", "pendências", "horário", "incompatibilidade de horário",
            "fila", "atendimento", "acesso", "dificuldade de acesso", "sem tempo para resolver",
        ],
    },
    TopicDef {
        key: "criticas_a_escala_6x1",
        name: "Críticas à Escala 6x1",
        keywords: &[
            "escala", "6x1", "escala 6x1", "desumano", "desumana", "escravidão", "escravo",
            "escrava", "exploração", "injusto", "injusta", "denúncia", "crítica", "reclamação",
            "mudar escala", "5x2", "escala 5x2", "4x3", "escala 4x3", "reforma trabalhista",
            "trabalhista", "sistema", "sistema trabalhista", "abolir 6x1", "melhor escala",
        ],
    },
    TopicDef {
        key: "grupos_vulneraveis",
        name: "Grupos Vulneráveis",
        keywords: &[
            "vulnerável", "vulneráveis", "mãe solo", "mãe solteira", "doença crônica",
            "doenças crônicas", "deficiência", "deficiente", "idoso", "idosa", "minorias",
            "necessidades especiais", "condição especial", "doente", "saúde frágil",
            "dependente", "dependentes", "carga extra", "dificuldade extra",
            "desafios adicionais",
        ],
    },
];

/// Serializable topic definition: the shape of a custom lexicon file entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicSpec {
    pub key: String,
    pub name: String,
    pub keywords: Vec<String>,
}

/// A topic ready for matching.
#[derive(Debug, Clone)]
pub struct Topic {
    key: String,
    name: String,
    /// Lowercased, deduplicated, in definition order
    keywords: Vec<String>,
    keyword_set: HashSet<String>,
}

impl Topic {
    /// Build a topic, normalizing its keywords. Returns None when no
    /// non-blank keyword survives.
    fn new(key: &str, name: &str, raw_keywords: &[impl AsRef<str>]) -> Option<Self> {
        let mut keywords = Vec::with_capacity(raw_keywords.len());
        let mut keyword_set = HashSet::with_capacity(raw_keywords.len());

        for raw in raw_keywords {
            let keyword = raw.as_ref().trim().to_lowercase();
            if keyword.is_empty() {
                continue;
            }
            if keyword_set.insert(keyword.clone()) {
                keywords.push(keyword);
            }
        }

        if keywords.is_empty() {
            return None;
        }

        Some(Self {
            key: key.to_string(),
            name: name.to_string(),
            keywords,
            keyword_set,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Exact (whole-keyword) membership test.
    pub fn has_keyword(&self, token: &str) -> bool {
        self.keyword_set.contains(token)
    }

    pub fn to_spec(&self) -> TopicSpec {
        TopicSpec {
            key: self.key.clone(),
            name: self.name.clone(),
            keywords: self.keywords.clone(),
        }
    }
}

/// The immutable set of topics a classifier matches against.
#[derive(Debug, Clone)]
pub struct Lexicon {
    topics: Vec<Topic>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Lexicon {
    /// The built-in Portuguese lexicon.
    pub fn builtin() -> Self {
        let topics = BUILTIN_TOPICS
            .iter()
            .filter_map(|def| Topic::new(def.key, def.name, def.keywords))
            .collect();
        Self { topics }
    }

    /// Build a lexicon from topic specs, rejecting empty keyword lists and
    /// duplicate keys.
    pub fn from_specs(specs: Vec<TopicSpec>) -> Result<Self> {
        if specs.is_empty() {
            anyhow::bail!("Lexicon defines no topics");
        }

        let mut seen = HashSet::new();
        let mut topics = Vec::with_capacity(specs.len());

        for spec in specs {
            let key = spec.key.trim();
            if key.is_empty() {
                anyhow::bail!("Lexicon topic has an empty key (name: {:?})", spec.name);
            }
            if !seen.insert(key.to_string()) {
                anyhow::bail!("Lexicon topic key {key:?} is defined more than once");
            }
            let name = if spec.name.trim().is_empty() {
                display_name_from_key(key)
            } else {
                spec.name.trim().to_string()
            };
            let topic = Topic::new(key, &name, spec.keywords.as_slice())
                .with_context(|| format!("Lexicon topic {key:?} has no keywords"))?;
            topics.push(topic);
        }

        Ok(Self { topics })
    }

    /// Parse a JSON array of `TopicSpec`.
    pub fn from_json(json: &str) -> Result<Self> {
        let specs: Vec<TopicSpec> =
            serde_json::from_str(json).context("Failed to parse lexicon JSON")?;
        Self::from_specs(specs)
    }

    /// Load a lexicon file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon file {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid lexicon file {}", path.display()))
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn get(&self, key: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.key == key)
    }

    /// Display name for a key, falling back to a title-cased key.
    pub fn display_name(&self, key: &str) -> String {
        self.get(key)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| display_name_from_key(key))
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Every single-word keyword across all topics.
    ///
    /// The lemmatizer only accepts a base form if it is in this set, so a
    /// reduced token is always something the classifier can match.
    pub fn vocabulary(&self) -> HashSet<String> {
        self.topics
            .iter()
            .flat_map(|t| t.keywords.iter())
            .filter(|kw| !kw.contains(char::is_whitespace))
            .cloned()
            .collect()
    }
}

/// `"vida_social"` -> `"Vida Social"`
fn display_name_from_key(key: &str) -> String {
    key.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
