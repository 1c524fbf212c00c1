//! Bundled translations: complete base-language bundles plus sparse
//! region overlays (usually only the skill name).

use crate::bundle::TranslationBundle;
use crate::key::MessageKey::*;
use crate::table::LocaleTable;

pub(crate) fn builtin() -> LocaleTable {
    let mut table = LocaleTable::new();
    table.insert("de", de());
    table.insert("de-DE", name_only("Weltraumwissen auf Deutsch"));
    table.insert("en", en());
    table.insert("en-AU", name_only("Austrailian Space Facts"));
    table.insert("en-CA", name_only("Canadian Space Facts"));
    table.insert("en-GB", name_only("British Space Facts"));
    table.insert("en-IN", name_only("Indian Space Facts"));
    table.insert("en-US", name_only("American Space Facts"));
    table.insert("es", es());
    table.insert("es-ES", name_only("Curiosidades del Espacio para España"));
    table.insert("es-MX", name_only("Curiosidades del Espacio para México"));
    table.insert("fr", fr());
    table.insert("fr-FR", name_only("Anecdotes françaises de l'espace"));
    table.insert("it", it());
    table.insert("it-IT", name_only("Aneddoti dallo spazio"));
    table.insert("ja", ja());
    table.insert("ja-JP", name_only("日本語版豆知識"));
    table.insert("pt", pt());
    table.insert("pt-BR", pt());
    table
}

fn name_only(skill_name: &str) -> TranslationBundle {
    let mut b = TranslationBundle::new();
    b.set_text(SkillName, skill_name);
    b
}

fn de() -> TranslationBundle {
    let mut b = TranslationBundle::new();
    b.set_text(SkillName, "Weltraumwissen");
    b.set_text(GetFactMessage, "Hier sind deine Fakten: ");
    b.set_text(
        HelpMessage,
        "Du kannst sagen, „Nenne mir einen Fakt über den Weltraum“, oder du kannst „Beenden“ sagen... Wie kann ich dir helfen?",
    );
    b.set_text(HelpReprompt, "Wie kann ich dir helfen?");
    b.set_text(
        FallbackMessage,
        "Die Weltraumfakten Skill kann dir dabei nicht helfen. Sie kann dir Fakten über den Raum erzählen, wenn du dannach fragst.",
    );
    b.set_text(FallbackReprompt, "Wie kann ich dir helfen?");
    b.set_text(ErrorMessage, "Es ist ein Fehler aufgetreten.");
    b.set_text(StopMessage, "Auf Wiedersehen!");
    b.set_list(
        Facts,
        [
            "Ein Jahr dauert auf dem Merkur nur 88 Tage.",
            "Die Venus ist zwar weiter von der Sonne entfernt, hat aber höhere Temperaturen als Merkur.",
            "Venus dreht sich entgegen dem Uhrzeigersinn, möglicherweise aufgrund eines früheren Zusammenstoßes mit einem Asteroiden.",
            "Auf dem Mars erscheint die Sonne nur halb so groß wie auf der Erde.",
            "Jupiter hat den kürzesten Tag aller Planeten.",
        ],
    );
    b
}

fn en() -> TranslationBundle {
    let mut b = TranslationBundle::new();
    b.set_text(SkillName, "Space Facts");
    b.set_text(GetFactMessage, "Here's your fact: ");
    b.set_text(
        HelpMessage,
        "You can say tell me a space fact, or, you can say exit... What can I help you with?",
    );
    b.set_text(HelpReprompt, "What can I help you with?");
    b.set_text(
        FallbackMessage,
        "The Space Facts skill can't help you with that.  It can help you discover facts about space if you say tell me a space fact. What can I help you with?",
    );
    b.set_text(FallbackReprompt, "What can I help you with?");
    b.set_text(ErrorMessage, "Sorry, an error occurred.");
    b.set_text(StopMessage, "Goodbye!");
    b.set_list(
        Facts,
        [
            "A year on Mercury is just 88 days long.",
            "Despite being farther from the Sun, Venus experiences higher temperatures than Mercury.",
            "On Mars, the Sun appears about half the size as it does on Earth.",
            "Jupiter has the shortest day of all the planets.",
            "The Sun is an almost perfect sphere.",
        ],
    );
    b
}

fn es() -> TranslationBundle {
    let mut b = TranslationBundle::new();
    b.set_text(SkillName, "Curiosidades del Espacio");
    b.set_text(GetFactMessage, "Aquí está tu curiosidad: ");
    b.set_text(
        HelpMessage,
        "Puedes decir dime una curiosidad del espacio o puedes decir salir... Cómo te puedo ayudar?",
    );
    b.set_text(HelpReprompt, "Como te puedo ayudar?");
    b.set_text(
        FallbackMessage,
        "La skill Curiosidades del Espacio no te puede ayudar con eso.  Te puede ayudar a descubrir curiosidades sobre el espacio si dices dime una curiosidad del espacio. Como te puedo ayudar?",
    );
    b.set_text(FallbackReprompt, "Como te puedo ayudar?");
    b.set_text(ErrorMessage, "Lo sentimos, se ha producido un error.");
    b.set_text(StopMessage, "Adiós!");
    b.set_list(
        Facts,
        [
            "Un año en Mercurio es de solo 88 días",
            "A pesar de estar más lejos del Sol, Venus tiene temperaturas más altas que Mercurio",
            "En Marte el sol se ve la mitad de grande que en la Tierra",
            "Jupiter tiene el día más corto de todos los planetas",
            "El sol es una esféra casi perfecta",
        ],
    );
    b
}

fn fr() -> TranslationBundle {
    let mut b = TranslationBundle::new();
    b.set_text(SkillName, "Anecdotes de l'Espace");
    b.set_text(GetFactMessage, "Voici votre anecdote : ");
    b.set_text(
        HelpMessage,
        "Vous pouvez dire donne-moi une anecdote, ou, vous pouvez dire stop... Comment puis-je vous aider?",
    );
    b.set_text(HelpReprompt, "Comment puis-je vous aider?");
    b.set_text(
        FallbackMessage,
        "La skill des anecdotes de l'espace ne peux vous aider avec cela. Je peux vous aider à découvrir des anecdotes sur l'espace si vous dites par exemple, donne-moi une anecdote. Comment puis-je vous aider?",
    );
    b.set_text(FallbackReprompt, "Comment puis-je vous aider?");
    b.set_text(ErrorMessage, "Désolé, une erreur est survenue.");
    b.set_text(StopMessage, "Au revoir!");
    b.set_list(
        Facts,
        [
            "Une année sur Mercure ne dure que 88 jours.",
            "En dépit de son éloignement du Soleil, Vénus connaît des températures plus élevées que sur Mercure.",
            "Sur Mars, le Soleil apparaît environ deux fois plus petit que sur Terre.",
            "De toutes les planètes, Jupiter a le jour le plus court.",
            "Le Soleil est une sphère presque parfaite.",
        ],
    );
    b
}

fn it() -> TranslationBundle {
    let mut b = TranslationBundle::new();
    b.set_text(SkillName, "Aneddoti dallo spazio");
    b.set_text(GetFactMessage, "Ecco il tuo aneddoto: ");
    b.set_text(
        HelpMessage,
        "Puoi chiedermi un aneddoto dallo spazio o puoi chiudermi dicendo \"esci\"... Come posso aiutarti?",
    );
    b.set_text(HelpReprompt, "Come posso aiutarti?");
    b.set_text(
        FallbackMessage,
        "Non posso aiutarti con questo. Posso aiutarti a scoprire fatti e aneddoti sullo spazio, basta che mi chiedi di dirti un aneddoto. Come posso aiutarti?",
    );
    b.set_text(FallbackReprompt, "Come posso aiutarti?");
    b.set_text(ErrorMessage, "Spiacenti, si è verificato un errore.");
    b.set_text(StopMessage, "A presto!");
    b.set_list(
        Facts,
        [
            "Sul pianeta Mercurio, un anno dura solamente 88 giorni.",
            "Pur essendo più lontana dal Sole, Venere ha temperature più alte di Mercurio.",
            "Su Marte il sole appare grande la metà che su la terra. ",
            "Tra tutti i pianeti del sistema solare, la giornata più corta è su Giove.",
            "Il Sole è quasi una sfera perfetta.",
        ],
    );
    b
}

// No fallback strings: the platform's fallback intent never shipped for ja.
fn ja() -> TranslationBundle {
    let mut b = TranslationBundle::new();
    b.set_text(SkillName, "日本語版豆知識");
    b.set_text(GetFactMessage, "知ってましたか？");
    b.set_text(
        HelpMessage,
        "豆知識を聞きたい時は「豆知識」と、終わりたい時は「おしまい」と言ってください。どうしますか？",
    );
    b.set_text(HelpReprompt, "どうしますか？");
    b.set_text(ErrorMessage, "申し訳ありませんが、エラーが発生しました");
    b.set_text(StopMessage, "さようなら");
    b.set_list(
        Facts,
        [
            "水星の一年はたった88日です。",
            "金星は水星と比べて太陽より遠くにありますが、気温は水星よりも高いです。",
            "金星は反時計回りに自転しています。過去に起こった隕石の衝突が原因と言われています。",
            "火星上から見ると、太陽の大きさは地球から見た場合の約半分に見えます。",
            "木星の<sub alias=\"いちにち\">1日</sub>は全惑星の中で一番短いです。",
            "天の川銀河は約50億年後にアンドロメダ星雲と衝突します。",
        ],
    );
    b
}

fn pt() -> TranslationBundle {
    let mut b = TranslationBundle::new();
    b.set_text(SkillName, "Fatos Espaciais");
    b.set_text(GetFactMessage, "Aqui vai: ");
    b.set_text(
        HelpMessage,
        "Você pode me perguntar por um fato interessante sobre o espaço, ou, fexar a skill. Como posso ajudar?",
    );
    b.set_text(HelpReprompt, "O que vai ser?");
    b.set_text(
        FallbackMessage,
        "A skill fatos espaciais não tem uma resposta para isso. Ela pode contar informações interessantes sobre o espaço, é só perguntar. Como posso ajudar?",
    );
    b.set_text(
        FallbackReprompt,
        "Eu posso contar fatos sobre o espaço. Como posso ajudar?",
    );
    b.set_text(ErrorMessage, "Desculpa, algo deu errado.");
    b.set_text(StopMessage, "Tchau!");
    b.set_list(
        Facts,
        [
            "Um ano em Mercúrio só dura 88 dias.",
            "Apesar de ser mais distante do sol, Venus é mais quente que Mercúrio.",
            "Visto de marte, o sol parece ser metade to tamanho que nós vemos da terra.",
            "Júpiter tem os dias mais curtos entre os planetas no nosso sistema solar.",
            "O sol é quase uma esfera perfeita.",
        ],
    );
    b
}
