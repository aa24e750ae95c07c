//! Static message templates
//!
//! Literal texts sent to contacts, grouped by menu, event section and reply.
//! Bold spans are marked `*like this*`; the transport renders them for the
//! channel. Lines of underscores are plain section rules.

// Menus

pub const MAIN_MENU: &str = r#"🚍 *DP EVENTOS TUR*
Conectando você aos melhores eventos do Brasil! 🛣️

👋🏼 *Olá! Seja bem-vindo(a).*
Digite o número para saber mais:

🚌 *Excursões Disponíveis*
1️⃣ - Festa do Peão de Barretos
2️⃣ - Jaguariúna Rodeo Festival
3️⃣ - Federal Fantasy - Alfenas
4️⃣ - Réveillon Copacabana 2026

💳 *Reservas e Pagamentos*
5️⃣ - Informações sobre minha reserva
6️⃣ - Fazer Pagamentos

👨🏻‍💻 *Dúvidas e Suporte*
7️⃣ - Falar com atendente
_____________________________"#;

pub const BARRETOS_MENU: &str = r#"🤠 *Festa do Peão de Barretos 2025*
Digite o número para saber mais:

📋 *Informativo Completo*
1️⃣ - Receba todas Informações

🔍 *Informações Detalhadas:*
2️⃣ - Datas・Embarques・Horários
3️⃣ - Transporte・Open Bar
4️⃣ - Ingressos Barretos

💳 *Reservas e Pagamento*
5️⃣ - Formas de Pagamento
6️⃣ - Reservar minha Vaga

👨🏻‍💻 *Dúvidas e Suporte*
7️⃣ - Falar com Atendente

⚙️ *Opções de Navegação*
8️⃣ - Voltar ao Menu Principal
9️⃣ - Encerrar Atendimento"#;

pub const JAGUARIUNA_MENU: &str = r#"🤠 *Jaguariúna Rodeo Festival 2025*
Digite o número para saber mais:

📋 *Informativo Completo*
1️⃣ - Receba todas Informações

🔍 *Informações Detalhadas:*
2️⃣ - Datas・Embarques・Horários
3️⃣ - Transporte・Open Bar
4️⃣ - Ingressos Jaguariúna

💳 *Reservas e Pagamento*
5️⃣ - Formas de Pagamento
6️⃣ - Reservar minha Vaga

👨🏻‍💻 *Dúvidas e Suporte*
7️⃣ - Falar com Atendente

⚙️ *Opções de Navegação*
8️⃣ - Voltar ao Menu Principal
9️⃣ - Encerrar Atendimento"#;

pub const FEDERAL_FANTASY_MENU: &str = r#"🎭 *Federal Fantasy 2025*
Digite o número para saber mais:

📋 *Informativo Completo*
1️⃣ - Receba todas Informações

🔍 *Informações Detalhadas:*
2️⃣ - Datas・Embarques・Horários
3️⃣ - Transporte・Open Bar
4️⃣ - Ingressos Federal Fantasy

💳 *Reservas e Pagamento*
5️⃣ - Formas de Pagamento
6️⃣ - Reservar minha Vaga

👨🏻‍💻 *Dúvidas e Suporte*
7️⃣ - Falar com Atendente

⚙️ *Opções de Navegação*
8️⃣ - Voltar ao Menu Principal
9️⃣ - Encerrar Atendimento"#;

pub const REVEILLON_MENU: &str = r#"🎆 *Réveillon Copacabana 2026*
Digite o número para saber mais:

📋 *Informativo Completo*
1️⃣ - Receba todas Informações

🔍 *Informações Detalhadas:*
2️⃣ - Datas・Embarques・Horários
3️⃣ - Transporte・Open Bar

💳 *Reservas e Pagamento*
4️⃣ - Formas de Pagamento
5️⃣ - Reservar minha Vaga

👨🏻‍💻 *Dúvidas e Suporte*
6️⃣ - Falar com Atendente

⚙️ *Opções de Navegação*
7️⃣ - Voltar ao Menu Principal
8️⃣ - Encerrar Atendimento"#;

// Federal Fantasy

pub const FEDERAL_FANTASY_SHOWS: &str = r#"🎭 *Federal Fantasy 2025 com a DP Eventos!*

🌟 Entre em um mundo de fantasia e aventura nesse festival único. Curta 12 horas de open bar e mega atrações!
_____________________________

➡️ *SÁBADO, 27 DE SETEMBRO*

🎶 *LINE-UP CONFIRMADO!* 🎶
🎤 🎚️ Ivete Sangalo - Felipe Amorim - Livinho - L7nnon - DJ GBR - Fialho

🔔 As atrações são divulgadas gradualmente pelo próprio organizador do evento. Fique de olho! Assim que novas atrações forem anunciadas, informaremos por aqui. 😉"#;

pub const FEDERAL_FANTASY_BOARDING: &str = r#"➡️ *EMBARQUES*
📍14h30 - Rod. Nova Jacareí.
📍14h50 - Tenda Vale Sul SJC.
📍15h00 - Posto Shell CTA SJC.
📍15h20 - Simpatia Shell Caçapava.
📍15h50 - Rod. Nova Taubaté.
📍16h40 - Posto Grillo St Ant do Pinhal.

⏳ *PARADA:*
🕗 No Restaurante Fernandão - Cardápio variado e vestiário para finalização e troca de roupa.

🏁 *CHEGADA*
🕗 22h00 - Previsão de chegada na Federal Fantasy. Podendo esse horário ser estendido devido a atrasos nos embarques e trânsito, por exemplo.

🚌 *RETORNO*
🕗 08h00 - Previsão de retorno: 45 minutos após o término do show."#;

pub const FEDERAL_FANTASY_TRANSPORT: &str = r#"⬇️ *INFORMAÇÕES TRANSPORTE*

🚌 Ônibus Executivo
❄️ Ar-condicionado
🚻 Banheiro
🍻 Serviço de Open Bar (opcional)
🎟️ Ingresso Federal (opcional)
👨🏻‍💼 Monitores

💳 *R$220,00 - TRANSPORTE*
Valor sem o serviço de open bar incluso.

⚠️ *Informação importante:*
O valor acima *NÃO INCLUI* o serviço de open bar. Portanto, não será permitido embarcar com ou consumir bebidas alcoólicas dentro do ônibus, sendo autorizado apenas o consumo de água. Caso deseje consumir bebida alcoólica, será necessário contratar o serviço de open bar."#;

pub const FEDERAL_FANTASY_OPEN_BAR: &str = r#"➡️ *SERVIÇO DE OPEN BAR:*
💳 *R$40,00 - Valor do serviço*

*Bebidas inclusas:*
🍺 Cerveja: Budweiser ou similar
🍸 Vodka: Smirnoff ou similar
🍹 Gin: Theros ou similar
⚡ Baly: (tradicional, melancia e tropical)
🧊 Refrigerante, água, gelo, copos e canudos

⏰ *Início do serviço:* Após o último embarque

⏳ *Duração:* Todo o trajeto de ida até Federal Fantasy.

✅ *Leve sua bebida favorita:* Com o serviço de open bar ativo, além de aproveitar todas as bebidas disponíveis, você ainda pode embarcar com bebidas adicionais de sua preferência."#;

pub const FEDERAL_FANTASY_TICKETS: &str = r#"➡️ *INGRESSOS FEDERAL FANTASY*
Garanta seu ingresso *Federal Fantasy* com a DP Eventos! 🎟️✨

💳 *PISTA VIP: R$180,00*
*Incluso:* Open Bar de Cerveja, Vodka, Coquetel Alcoólico, Refri e Suco.

💳 *FRONT STAGE: R$250,00*
*Incluso:* Open Bar de Cerveja, Vodka, Gin, Coquetel Alcoólico, Refri, Água e Suco.

💳 *CAMAROTE: R$360,00*
*Incluso:* Cerveja, Água, Refrigerante, Coquetel alcoólico, Gin, Suco, Whisky, Vodka e Energético.

⚠️ *Os valores dos ingressos estão sujeitos à alteração conforme o lote vigente na hora da solicitação.*"#;

pub const FEDERAL_FANTASY_PAYMENT: &str = r#"➡️ *FORMAS DE PAGAMENTOS:*

💸 *PIX:* Pagamento à vista ou parcelado:

→ Até 3x sem juros:
▪️ 1ª parcela: no ato da reserva
↳ Parcelas restantes: pagas mensalmente nos meses seguintes.

💳 *Cartão de Crédito:*
→ Até 6x sem juros
→ 7x a 12x: com juros (taxa variável – consulte)"#;

// Barretos

pub const BARRETOS_SHOWS: &str = r#"🤠 *Festa do Peão de Barretos 2025 com a DP Eventos!*

🌟 Viva a emoção do rodeio mais tradicional da América Latina!
_____________________________

➡️ *SÁBADO, 23 DE AGOSTO*
*Palco Estádio:* Ana Castela / Zé Neto & Cristiano / Nattan.

*Palco Amanhecer:* Guilherme e Benuto / Maria Cecilia & Rodolfo / Léo & Raphael / Diego e Arnaldo / Jirayauai.

➡️ *SÁBADO, 30 DE AGOSTO*
*Palco Estádio:* Jorge & Mateus / Edson & Hudson / César Menotti & Fabiano / Rionegro & Solimões.

*Palco Amanhecer:* Trio Parada Dura / Fiduma e Jeca / Bruno Rosa."#;

pub const BARRETOS_BOARDING: &str = r#"⬇️ *PONTOS DE EMBARQUE*

📍 07h30 - Rod. Guaratinguetá
📍 07h40 - Rod. Aparecida
📍 08h10 - Spani Pindamonhangaba
📍 08h40 - Rod. Nova Taubaté
📍 09h00 - Ponto Nestlé Caçapava
📍 09h50 - Rod. Nova SJC
📍 10h15 - Posto Gruta SJC
📍 10h30 - Rod. Nova Jacareí
📍 11h00 - Posto Portal Igaratá

⏳ *Parada:*
🕗 14h30 - 16h30 no Restaurante Castelo Plaza (alimentação, troca de roupa e opção de banho)

🏁 *Chegada:*
🕗 20h00 - Previsão de chegada em Barretos. Podendo esse horário ser estendido devido a atrasos nos embarques e trânsito, por exemplo.

🚌 *Retorno:*
🕗 07h00 - Saída 45 minutos após o término do show"#;

pub const BARRETOS_TRANSPORT: &str = r#"⬇️ *INFORMAÇÕES TRANSPORTE*

🚌 Ônibus Executivo
❄️ Ar-condicionado
🚻 Banheiro
🍻 Serviço de Open Bar (opcional)
👨🏻‍💼 Monitores

💳 *R$340,00 - Embarque A*
📍 Taubaté 📍 Caçapava
📍 São José dos Campos
📍 Jacareí 📍 Igaratá

💳 *R$355,00 - Embarque B*
📍 Pindamonhangaba

💳 *R$380,00 - Embarque C*
📍 Guaratinguetá 📍 Aparecida

⚠️ O valor *não inclui* o serviço de open bar. Portanto, não será permitido embarcar ou consumir bebidas alcoólicas dentro do ônibus sem a contratação do serviço de open bar. Água é liberada."#;

pub const BARRETOS_OPEN_BAR: &str = r#"⬇️ *SERVIÇO DE OPEN BAR*
🍻 *R$50,00 - Valor do serviço*

*Bebidas inclusas:*
🍺 Cerveja: Budweiser ou similar
🥃 Whisky: Red Label ou similar
🍸 Vodka: Smirnoff ou similar
🍹 Gin: Theros ou similar
⚡ Baly: (tradicional, melancia e tropical)
🧊 Refrigerante, água, gelo, copos e canudos

⏰ *Início do serviço:* Após o último embarque

⏳ *Duração:* Todo o trajeto de ida até Barretos

✅ *Bebidas adicionais:* Permitido levar para consumo pessoal"#;

pub const BARRETOS_TICKETS: &str = r#"⬇️ *INGRESSOS BARRETOS*
Compre seu ingresso no site oficial.

🔗 *Link para compra:*
https://cart.totalacesso.com/70festadopeaodeboiadeirodebarretos2025

🎟️ *Parque / Rodeio / Show - Meia:*
▪️ R$205,00 ~ R$300,00
  
🎟️ *Parque / Rodeio / Show - Solidário:*
▪️ R$280,00 ~ R$380,00

*Outros Setores:* (Solicitar consulta)

・ O ingresso solidário dá acesso igual ao ingresso inteira.

・ Para aquisição do ingresso meia-entrada, é obrigatório o cadastro do beneficiário e a validação do documento no site da Total Acesso."#;

pub const BARRETOS_PAYMENT: &str = r#"➡️ *FORMAS DE PAGAMENTO*

💸 *PIX:*
Pagamento à vista ou parcelado:

→ Até 2x sem juros:
▪️ 1ª parcela: no ato da reserva
↳ Parcelas restantes: pagas mensalmente nos meses seguintes.

💳 *Cartão de Crédito:*
→ Até 6x sem juros
→ 7x a 12x: com juros (taxa variável – consulte)"#;

// Jaguariuna

pub const JAGUARIUNA_SHOWS: &str = r#"🤠 *Jaguariúna Rodeo Festival 2025 com a DP Eventos!*

🌟 Prepare-se para rodeios emocionantes, shows imperdíveis e muita festa nesse tradicional evento!
_____________________________

➡️ *SEXTA, 19 de SETEMBRO*
Chitãozinho & Xororó / Murilo Huff / Felipe & Rodrigo / Lauana Prado.

➡️ *SÁBADO, 20 de SETEMBRO*
Jorge & Mateus / Luan Santana / em breve mais 2 atrações.

➡️ *SEXTA, 26 de SETEMBRO*
Bruno & Marrone / Ana Castela / Natanzinho / em breve mais 1 atração.

➡️ *SÁBADO, 27 de SETEMBRO*
Kacey Musgraves / Zé Neto & Cristiano / Nattan / em breve mais 1 atração.

🔔 As atrações são divulgadas gradualmente pelo próprio organizador do evento. Fique de olho!
Assim que novas atrações forem anunciadas, informaremos por aqui. 😉"#;

pub const JAGUARIUNA_BOARDING: &str = r#"➡️ *EMBARQUES: SEXTAS-FEIRAS*
📍 16h20 - Rod. Guaratinguetá
📍 16h30 - Rod. Aparecida
📍 17h00 - Spani Pindamonhangaba
📍 17h10 - Rod. Nova Taubaté
📍 17h30 - Ponto Nestlé Caçapava
📍 18h30 - Rod. Nova SJC
📍 18h40 - Posto Gruta SJC
📍 19h00 - Rod. Nova Jacareí
📍 19h30 - Posto Portal Igaratá

➡️ *EMBARQUES: SÁBADOS*
📍 15h20 - Rod. Guaratinguetá
📍 15h30 - Rod. Aparecida
📍 16h00 - Spani Pindamonhangaba
📍 16h10 - Rod. Nova Taubaté
📍 16h30 - Ponto Nestlé Caçapava
📍 17h30 - Rod. Nova SJC
📍 17h40 - Posto Gruta SJC
📍 18h00 - Rod. Nova Jacareí
📍 18h30 - Posto Portal Igaratá

ℹ️ Para atender a todos, especialmente aqueles que trabalham na sexta-feira, os embarques das sextas-feiras sairão uma hora mais tarde, levando em consideração os horários de sábado.

⏳ *Parada:*
🕗 Restaurante Graal Mirante - cardápio variado e vestiário para troca de roupa

🏁 *Chegada:*
🕗 21h30 - Previsão em Jaguariúna. Podendo esse horário ser estendido devido a atrasos nos embarques e trânsito, por exemplo.

🚌 *Retorno:*
🕗 07h00 - Saída 45 minutos após o término do show"#;

pub const JAGUARIUNA_TRANSPORT: &str = r#"⬇️ *INFORMAÇÕES TRANSPORTE*

🚌 Ônibus Executivo
❄️ Ar-condicionado
🚻 Banheiro
🍻 Serviço de Open Bar (opcional)
🎟️ Ingresso Jaguariúna (opcional)
👨🏻‍💼 Monitores

💳 *R$190,00 - Embarque A*
📍 Taubaté 📍 Caçapava
📍 São José dos Campos
📍 Jacareí 📍 Igaratá

💳 *R$205,00 - Embarque B*
📍 Pindamonhangaba

💳 *R$230,00 - Embarque C*
📍 Guaratinguetá 📍 Aparecida

⚠️ *Importante:*
O valor *não inclui* o serviço de open bar. Portanto, não será permitido embarcar ou consumir bebidas alcoólicas dentro do ônibus sem a contratação do serviço de open bar. Água é liberada."#;

pub const JAGUARIUNA_OPEN_BAR: &str = r#"⬇️ *SERVIÇO DE OPEN BAR*
🍻 *R$40,00 - Valor do serviço*

*Bebidas inclusas:*
🍺 Cerveja: Budweiser ou similar
🍸 Vodka: Smirnoff ou similar
🍹 Gin: Theros ou similar
⚡ Baly: (tradicional, melancia e tropical)
🧊 Refrigerante, água, gelo, copos e canudos

⏰ *Início do serviço:* Após o último embarque

⏳ *Duração:* Todo o trajeto de ida até Jaguariúna

✅ *Bebidas adicionais:* Permitido levar para consumo pessoal"#;

pub const JAGUARIUNA_TICKETS: &str = r#"⬇️ *INGRESSOS JAGUARIÚNA*
Garanta seu ingresso Arena Meia com a DP Eventos! 🎟️✨

🎟️ *SEXTA, 19 de SETEMBRO*
▪️ R$33,60 - Arena Meia

🎟️ *SÁBADO, 20 de SETEMBRO*
▪️ R$123,20 - Arena Meia

🎟️ *SEXTA, 26 de SETEMBRO*
▪️ R$33,60 - Arena Meia

🎟️ *SÁBADO, 27 de SETEMBRO*
▪️ R$67,20 - Arena Meia

*Outros Setores:* Para ingressos inteira ou camarote, acesse o site da Total Acesso.

⚠️ Valores sujeitos a alteração conforme lote vigente."#;

pub const JAGUARIUNA_PAYMENT: &str = r#"➡️ *FORMAS DE PAGAMENTOS:*

💸 *PIX:*
Pagamento à vista ou parcelado:

→ Até 3x sem juros:
▪️ 1ª parcela: no ato da reserva
↳ Parcelas restantes: pagas mensalmente nos meses seguintes.

💳 *Cartão de Crédito:*
→ Até 6x sem juros
→ 7x a 12x: com juros (taxa variável – consulte)"#;

// Reveillon

pub const REVEILLON_SHOWS: &str = r#"🥂 *Réveillon Copacabana 2026 com a DP Eventos!*
  
🌟 Celebre o ano novo em grande estilo, no maior Réveillon do Brasil, com shows, queima de fogos e muita energia!
_____________________________

➡️ *PROGRAMAÇÃO:*
🎤 Shows: Em breve

🎆 12 minutos de queima de fogos.

✅ Acesso aos shows são gratuitos.

🔔 As atrações são divulgadas gradualmente pela Prefeitura do Rio. Fique de olho! Assim que atrações forem confirmadas, informaremos por aqui. 😉"#;

pub const REVEILLON_BOARDING: &str = r#"➡️ *EMBARQUES: 31 de DEZEMBRO*

📍 11h00 - Rod. Nova Jacareí
📍 11h20 - Tenda Vale Sul SJC
📍 11h40 - Posto Shell CTA SJC
📍 12h00 - Simpatia Shell Caçapava
📍 12h20 - Rod. Nova Taubaté
📍 12h40 - Spani Pindamonhangaba
📍 13h20 - Rod. Guaratinguetá
📍 13h40 - Chevrolet Lorena

⏳ *PARADA:*
🕗 16h00 - Parada no restaurante Graal Resende - Cardápio variado e vestiário para finalização e troca de roupa.

🏁 *CHEGADA*
🕗 18h30 - Previsão de chegada em Copacabana. Podendo esse horário ser estendido devido a atrasos nos embarques e trânsito, por exemplo.

🚌 *RETORNO*
🕗 06h00 - Previsão de retorno: Após liberação dos acessos pela fiscalização em Copacabana."#;

pub const REVEILLON_TRANSPORT: &str = r#"💳 *R$280,00 - Valor do transporte*

⚠️ *Importante:*
O valor *não inclui* o serviço de open bar. Portanto, não será permitido embarcar ou consumir bebidas alcoólicas dentro do ônibus sem a contratação do serviço de open bar. Água é liberada."#;

pub const REVEILLON_OPEN_BAR: &str = r#"⬇️ *SERVIÇO DE OPEN BAR*
🍻 *R$40,00 - Valor do serviço*

*Bebidas inclusas:*
🍺 Cerveja: Budweiser ou similar
🍸 Vodka: Smirnoff ou similar
🍹 Gin: Theros ou similar
⚡ Baly: (tradicional, melancia e tropical)
🧊 Refrigerante, água, gelo, copos e canudos
  
⏰ *Início do serviço:* Após o último embarque

⏳ *Duração:* Todo o trajeto de ida até Copacabana

✅ *Bebidas adicionais:* Permitido levar para consumo personal"#;

pub const REVEILLON_PAYMENT: &str = r#"➡️ *FORMAS DE PAGAMENTOS:*

💸 *PIX:* Pagamento à vista ou parcelado:

→ Até 4x sem juros:
▪️ 1ª parcela: no ato da reserva
↳ Parcelas restantes: pagas mensalmente nos meses seguintes.

💳 *Cartão de Crédito:*
→ Até 6x sem juros
→ 7x a 12x: com juros (taxa variável – consulte)"#;

pub const REVEILLON_PACKAGE: &str = r#"➡️ *INFORMAÇÕES TRANSPORTE:*

🚌 Ônibus Executivo
❄️ Ar-condicionado
🚻 Banheiro
🍻 Serviço de Open Bar (opcional)
👨🏻‍💼 Monitores"#;

// Replies

pub const RESERVATION_REQUESTED: &str = r#"✅ Sua solicitação de reserva foi registrada!

🧑🏻‍💻Um de nossos atendentes entrará em contato em breve para finalizar sua reserva."#;

pub const AGENT_HANDOFF: &str = r#"🧑🏻‍💻 Por gentileza, aguarde. Um de nossos atendentes dará continuidade ao seu atendimento.

Para voltar ↩️ ao menu, digite *Menu*."#;

pub const FAREWELL: &str = r#"👋🏻 Atendimento encerrado. Sempre que precisar, é só chamar por aqui que retomamos seu atendimento.

DP Eventos agradece seu contato. 💙"#;

pub const RETURNING_TO_MAIN_MENU: &str = r#"🔁 Voltando ao Menu Principal..."#;

pub const INVALID_OPTION: &str = r#"⚠️ Opção inválida. Por gentileza, digite um número da lista."#;

pub const MENU_PROMPT: &str = r#"*Por favor escolha uma opção:*
1️⃣ - Voltar ao Menu. ↩️
2️⃣ - Falar com um Atendente. 👨🏻‍💻
0️⃣ - Encerrar Atendimento. 😢"#;

pub const MENU_CLEANUP_NOTICE: &str = r#"🗑️ Os *Menus* são apagados, mas as informações importantes permanecem visíveis no atendimento. 😉"#;

pub const INACTIVITY_REMINDER: &str = r#"👋🏼 *Oi! Ainda está por aqui?* 👀
Escolha uma das opções para seguir com o atendimento ou finalizar. ✅"#;

pub const INACTIVITY_FAREWELL: &str = r#"👨🏻‍💻 *Por falta de comunicação encerramos o atendimento.* 😢
Sempre que precisar, é só chamar por aqui que retomamos seu atendimento.

DP Eventos agradece seu contato. 💙"#;

pub const RESERVATION_ENQUIRY_HANDOFF: &str = r#"📬 *Sobre minha reserva*
Por gentileza, descreva o que deseja saber sobre sua reserva. Um de nossos atendentes responderá em breve.

↩️ Para voltar ao menu, digite *MENU.*"#;

pub const PAYMENT_PROOF_HANDOFF: &str = r#"👨🏻‍💻 Envie seu *nome e comprovante 🧾de pagamento* para validação.

Assim que confirmarmos, um de nossos atendentes entrará em contato.

↩️ Para voltar ao menu, digite *MENU.*"#;

pub const OPERATOR_TAKEOVER: &str = r#"👨🏻‍💻 Olá! Um atendente continuará seu atendimento. Por gentileza, aguarde."#;

pub const AUTOMATION_RESUMED: &str = r#"👨🏻‍💻 Entendido! Nosso atendimento automático foi retomado."#;
