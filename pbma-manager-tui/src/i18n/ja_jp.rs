//! 日本語 (ja-JP)

use super::keys::{
    CommonTexts, DialogTexts, HelpTexts, HintTexts, HomeTexts, MessageTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "PBMA Manager",
        ok: "OK",
        yes: "はい",
        no: "いいえ",
    },

    home: HomeTexts {
        sid_label: "SID",
        sid_placeholder: "SID を入力...",
        create_plugins: "プラグイン作成",
        creating_plugins: "処理中...",
        register_window: "窓 {n} を登録",
        windows_title: "窓登録",
        initialize: "初期化",
        initializing: "初期化中...",
        boot_windows: "起動窓数: {n}",
        plugin_progress: "プラグイン作成中... ({done}/{total})",
    },

    dialog: DialogTexts {
        error_title: "エラー",
        message_title: "お知らせ",
        confirm_title: "確認",
        help_title: "ヘルプ",
        close_hint: "Enter / Esc で閉じる",
    },

    messages: MessageTexts {
        sid_required: "SID を入力してください。",
        confirm_create_plugins: "プラグインを作成しますか？",
        confirm_register_window: "窓 {n} を登録しますか？",
        confirm_initialize: "本当に初期化しますか？",
        plugins_created: "プラグインの作成({n})に成功しました。",
        window_registered: "窓({n})の登録に成功しました。",
        initialized: "初期化されました。",
        resource_busy: "別のプロセスがリソースを使用中です。\n稼働中のChromeを閉じて再度お試しください。",
        user_data_missing: "User Dataが見つかりませんでした。",
        chrome_missing: "Chromeが見つかりませんでした。",
        register_failed: "窓 {n} の登録に失敗しました: {error}",
        initialize_failed: "初期化に失敗しました。",
        plugin_failed: "窓 {n} のプラグイン作成に失敗しました: {error}",
        sid_lookup_failed: "SID 情報の取得に失敗しました: {error}",
        unexpected: "予期しないエラーが発生しました",
    },

    hints: HintTexts {
        switch_focus: "移動",
        edit: "入力",
        select: "選択",
        execute: "実行",
        help: "ヘルプ",
        quit: "終了",
        choose: "はい/いいえ",
        close: "閉じる",
    },

    help: HelpTexts {
        global_section: "全体",
        page_section: "操作",
        focus: "フォーカス移動",
        quit: "終了",
        help: "ヘルプを表示",
        sid_enter: "SID 入力中: プラグインを作成",
        grid_move: "窓を選択",
        grid_enter: "選択した窓を登録",
        init_enter: "Chrome データを初期化",
        close_hint: "Esc でヘルプを閉じる",
    },
};
